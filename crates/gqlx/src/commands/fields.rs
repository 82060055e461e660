use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgqlx::query::FieldsQuery;

#[derive(Debug, clap::Args)]
pub(crate) struct FieldsCmd {
    #[arg(help="Only show deprecated fields.", long)]
    deprecated: bool,

    #[arg(
        help="Only show fields that accept the given argument (repeatable, \
             all must be present).",
        long="has-arg",
        value_name="ARG",
    )]
    has_arg: Vec<String>,

    #[arg(help="Only show fields that have a description.", long)]
    has_description: bool,

    #[arg(
        help="Filter field names with a glob pattern (e.g. `*Id`, `get*`).",
        long,
        value_name="GLOB",
    )]
    name: Option<String>,

    #[arg(
        help="Filter field names with a regular expression.",
        long="name-regex",
        value_name="REGEX",
    )]
    name_regex: Option<String>,

    #[arg(help="Only show nullable fields.", long)]
    nullable: bool,

    #[arg(help="Only show non-null fields.", long)]
    required: bool,

    #[arg(
        help="Only show fields whose base return type is the given type.",
        long,
        value_name="TYPE",
    )]
    returns: Option<String>,

    #[arg(
        help="List the fields of this type only (all types when omitted).",
        value_name="TYPE",
    )]
    type_name: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for FieldsCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let query = FieldsQuery {
            deprecated: self.deprecated,
            has_args: self.has_arg,
            has_description: self.has_description,
            name_glob: self.name,
            name_regex: self.name_regex,
            nullable: self.nullable,
            required: self.required,
            returns: self.returns,
            type_name: self.type_name,
        };
        if let Err(err) = query.validate() {
            return commands::failure(err);
        }
        log::debug!("Running {query:?}.");

        commands::run_query(
            &cli,
            "No fields found that match the filters.",
            |facade| facade.fields(&query),
        )
    }
}
