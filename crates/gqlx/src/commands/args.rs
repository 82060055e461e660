use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgqlx::query::ArgsQuery;

#[derive(Debug, clap::Args)]
pub(crate) struct ArgsCmd {
    #[arg(help="Only show deprecated arguments.", long)]
    deprecated: bool,

    #[arg(
        help="List the arguments of this field only, written `Type.field` \
             (every field when omitted).",
        value_name="FIELD",
    )]
    field: Option<String>,

    #[arg(help="Only show arguments that have a description.", long)]
    has_description: bool,

    #[arg(
        help="Filter argument names with a glob pattern (e.g. `*Id`).",
        long,
        value_name="GLOB",
    )]
    name: Option<String>,

    #[arg(
        help="Filter argument names with a regular expression.",
        long="name-regex",
        value_name="REGEX",
    )]
    name_regex: Option<String>,

    #[arg(help="Only show nullable arguments.", long)]
    nullable: bool,

    #[arg(help="Only show non-null arguments.", long)]
    required: bool,

    #[arg(
        help="Only show arguments whose base type is the given type.",
        long="type",
        value_name="TYPE",
    )]
    type_name: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for ArgsCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let query = ArgsQuery {
            deprecated: self.deprecated,
            field: self.field,
            has_description: self.has_description,
            name_glob: self.name,
            name_regex: self.name_regex,
            nullable: self.nullable,
            required: self.required,
            type_name: self.type_name,
        };
        if let Err(err) = query.validate() {
            return commands::failure(err);
        }
        log::debug!("Running {query:?}.");

        commands::run_query(
            &cli,
            "No arguments found that match the filters.",
            |facade| facade.args(&query),
        )
    }
}
