use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgqlx::query::ValuesQuery;

#[derive(Debug, clap::Args)]
pub(crate) struct ValuesCmd {
    #[arg(help="Only show deprecated values.", long)]
    deprecated: bool,

    #[arg(
        help="List the values of this enum only (every enum when omitted).",
        value_name="ENUM",
    )]
    enum_name: Option<String>,

    #[arg(help="Only show values that have a description.", long)]
    has_description: bool,
}

#[inherent::inherent]
impl RunnableCommand for ValuesCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let query = ValuesQuery {
            deprecated: self.deprecated,
            enum_name: self.enum_name,
            has_description: self.has_description,
        };
        log::debug!("Running {query:?}.");

        commands::run_query(
            &cli,
            "No values found that match the filters.",
            |facade| facade.values(&query),
        )
    }
}
