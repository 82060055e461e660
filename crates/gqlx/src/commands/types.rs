use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgqlx::query::TypesQuery;
use libgqlx::types::TypeKind;

#[derive(Debug, clap::Args)]
pub(crate) struct TypesCmd {
    #[arg(help="Only show enum types.", long="enum")]
    enum_kind: bool,

    #[arg(help="Only show types that have a description.", long)]
    has_description: bool,

    #[arg(
        help="Only show types that declare the given field (repeatable, all \
             must be present).",
        long="has-field",
        value_name="FIELD",
    )]
    has_field: Vec<String>,

    #[arg(
        help="Only show types that implement the given interface.",
        long,
        value_name="INTERFACE",
    )]
    implements: Option<String>,

    #[arg(help="Only show input object types.", long="input")]
    input_kind: bool,

    #[arg(help="Only show interface types.", long="interface")]
    interface_kind: bool,

    #[arg(
        help="Only show types of the given kind: scalar, type, interface, \
             union, enum, input (repeatable, any may match).",
        long,
        value_name="KIND",
    )]
    kind: Vec<String>,

    #[arg(
        help="Filter type names with a glob pattern (e.g. `*Connection`).",
        long,
        value_name="GLOB",
    )]
    name: Option<String>,

    #[arg(
        help="Filter type names with a regular expression.",
        long="name-regex",
        value_name="REGEX",
    )]
    name_regex: Option<String>,

    #[arg(
        help="Exclude types used by any of the given types (repeatable).",
        long="not-used-by",
        value_name="TYPE",
    )]
    not_used_by: Vec<String>,

    #[arg(
        help="Exclude types only when used by all of the given types \
             (repeatable).",
        long="not-used-by-all",
        value_name="TYPE",
    )]
    not_used_by_all: Vec<String>,

    #[arg(help="Only show scalar types.", long="scalar")]
    scalar_kind: bool,

    #[arg(help="Only show object types.", long="type")]
    type_kind: bool,

    #[arg(help="Only show union types.", long="union")]
    union_kind: bool,

    #[arg(
        help="Only show types used by every one of the given types \
             (repeatable).",
        long="used-by",
        value_name="TYPE",
    )]
    used_by: Vec<String>,

    #[arg(
        help="Only show types used by at least one of the given types \
             (repeatable).",
        long="used-by-any",
        value_name="TYPE",
    )]
    used_by_any: Vec<String>,
}
impl TypesCmd {
    fn kinds(&self) -> Result<Vec<TypeKind>, libgqlx::QueryError> {
        let mut kinds = self.kind.iter()
            .map(|kind| kind.parse::<TypeKind>())
            .collect::<Result<Vec<_>, _>>()?;

        let flagged_kinds = [
            (self.scalar_kind, TypeKind::Scalar),
            (self.type_kind, TypeKind::Object),
            (self.interface_kind, TypeKind::Interface),
            (self.union_kind, TypeKind::Union),
            (self.enum_kind, TypeKind::Enum),
            (self.input_kind, TypeKind::InputObject),
        ];
        kinds.extend(
            flagged_kinds.into_iter()
                .filter_map(|(flagged, kind)| flagged.then_some(kind)),
        );

        Ok(kinds)
    }
}

#[inherent::inherent]
impl RunnableCommand for TypesCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let kinds = match self.kinds() {
            Ok(kinds) => kinds,
            Err(err) => return commands::failure(err),
        };

        let query = TypesQuery {
            has_description: self.has_description,
            has_fields: self.has_field,
            implements: self.implements,
            kinds,
            name_glob: self.name,
            name_regex: self.name_regex,
            not_used_by: self.not_used_by,
            not_used_by_all: self.not_used_by_all,
            used_by: self.used_by,
            used_by_any: self.used_by_any,
        };
        if let Err(err) = query.validate() {
            return commands::failure(err);
        }
        log::debug!("Running {query:?}.");

        commands::run_query(
            &cli,
            "No types found that match the filters.",
            |facade| facade.types(&query),
        )
    }
}
