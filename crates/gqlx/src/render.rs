use crate::output_format::OutputFormat;
use comfy_table::Table;
use libgqlx::query::ArgInfo;
use libgqlx::query::FieldInfo;
use libgqlx::query::PathInfo;
use libgqlx::query::ReferenceInfo;
use libgqlx::query::TypeInfo;
use libgqlx::query::ValueInfo;

/// A result record that knows how to present itself in each
/// [`OutputFormat`].
pub(crate) trait Renderable: serde::Serialize {
    const TABLE_HEADER: &'static [&'static str];

    fn table_row(&self) -> Vec<String>;
    fn text_line(&self) -> String;
}

/// Renders `records` in the given format. Empty input renders as `[]` in
/// JSON and as nothing otherwise.
pub(crate) fn render<R: Renderable>(
    records: &[R],
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(records)?,

        OutputFormat::Text => records.iter()
            .map(Renderable::text_line)
            .collect::<Vec<_>>()
            .join("\n"),

        OutputFormat::Pretty if records.is_empty() => String::new(),

        OutputFormat::Pretty => {
            let mut table = Table::new();
            table.set_header(R::TABLE_HEADER.iter().copied());
            for record in records {
                table.add_row(record.table_row());
            }
            table.to_string()
        },
    })
}

fn single_line(description: Option<&str>) -> String {
    description.map(|desc| desc.replace('\n', " ")).unwrap_or_default()
}

fn description_suffix(description: Option<&str>) -> String {
    match description {
        Some(desc) => format!(" # {}", desc.replace('\n', " ")),
        None => String::new(),
    }
}

fn with_default(type_annotation: &str, default_value: Option<&str>) -> String {
    match default_value {
        Some(default_value) => format!("{type_annotation} = {default_value}"),
        None => type_annotation.to_string(),
    }
}

impl Renderable for TypeInfo {
    const TABLE_HEADER: &'static [&'static str] = &["kind", "name", "description"];

    fn table_row(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.name.to_owned(),
            single_line(self.description.as_deref()),
        ]
    }

    fn text_line(&self) -> String {
        format!(
            "{} {}{}",
            self.kind,
            self.name,
            description_suffix(self.description.as_deref()),
        )
    }
}

fn field_name(field: &FieldInfo, multiline_args: bool) -> String {
    let name = match &field.type_name {
        Some(type_name) => format!("{type_name}.{}", field.name),
        None => field.name.to_owned(),
    };
    if field.arguments.is_empty() {
        return name;
    }

    let args: Vec<String> = field.arguments.iter()
        .map(|arg| format!("{}: {}", arg.name, arg.type_annotation))
        .collect();
    if multiline_args {
        format!("{name}(\n  {}\n)", args.join(",\n  "))
    } else {
        format!("{name}({})", args.join(", "))
    }
}

impl Renderable for FieldInfo {
    const TABLE_HEADER: &'static [&'static str] = &["field", "type", "description"];

    fn table_row(&self) -> Vec<String> {
        vec![
            field_name(self, true),
            with_default(&self.type_annotation, self.default_value.as_deref()),
            single_line(self.description.as_deref()),
        ]
    }

    fn text_line(&self) -> String {
        format!(
            "{}: {}{}",
            field_name(self, false),
            with_default(&self.type_annotation, self.default_value.as_deref()),
            description_suffix(self.description.as_deref()),
        )
    }
}

fn arg_name(arg: &ArgInfo) -> String {
    match (&arg.type_name, &arg.field_name) {
        (Some(type_name), Some(field_name)) =>
            format!("{type_name}.{field_name}.{}", arg.name),
        _ => arg.name.to_owned(),
    }
}

impl Renderable for ArgInfo {
    const TABLE_HEADER: &'static [&'static str] = &["argument", "type", "description"];

    fn table_row(&self) -> Vec<String> {
        vec![
            arg_name(self),
            with_default(&self.type_annotation, self.default_value.as_deref()),
            single_line(self.description.as_deref()),
        ]
    }

    fn text_line(&self) -> String {
        format!(
            "{}: {}{}",
            arg_name(self),
            with_default(&self.type_annotation, self.default_value.as_deref()),
            description_suffix(self.description.as_deref()),
        )
    }
}

impl Renderable for PathInfo {
    const TABLE_HEADER: &'static [&'static str] = &["path"];

    fn table_row(&self) -> Vec<String> {
        vec![self.path.to_owned()]
    }

    fn text_line(&self) -> String {
        self.path.to_owned()
    }
}

impl Renderable for ReferenceInfo {
    const TABLE_HEADER: &'static [&'static str] = &["location", "kind", "type", "description"];

    fn table_row(&self) -> Vec<String> {
        vec![
            self.location.to_owned(),
            self.kind.to_string(),
            self.type_annotation.to_owned(),
            single_line(self.description.as_deref()),
        ]
    }

    fn text_line(&self) -> String {
        format!(
            "{}: {}{}",
            self.location,
            self.type_annotation,
            description_suffix(self.description.as_deref()),
        )
    }
}

fn value_name(value: &ValueInfo) -> String {
    match &value.enum_name {
        Some(enum_name) => format!("{enum_name}.{}", value.name),
        None => value.name.to_owned(),
    }
}

impl Renderable for ValueInfo {
    const TABLE_HEADER: &'static [&'static str] = &["value", "description"];

    fn table_row(&self) -> Vec<String> {
        vec![value_name(self), single_line(self.description.as_deref())]
    }

    fn text_line(&self) -> String {
        format!("{}{}", value_name(self), description_suffix(self.description.as_deref()))
    }
}
