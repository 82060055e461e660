use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgqlx::paths::DEFAULT_MAX_DEPTH;
use libgqlx::query::PathsQuery;

#[derive(Debug, clap::Args)]
pub(crate) struct PathsCmd {
    #[arg(
        help="Type to start searching from (defaults to the schema's query \
             root type).",
        long,
        value_name="TYPE",
    )]
    from: Option<String>,

    #[arg(
        default_value_t=DEFAULT_MAX_DEPTH,
        help="Maximum number of field hops per path.",
        long="max-depth",
        value_name="N",
    )]
    max_depth: usize,

    #[arg(help="Only show the shortest path(s).", long)]
    shortest: bool,

    #[arg(help="The type to find paths to.", value_name="TYPE")]
    target: String,

    #[arg(
        help="Only show paths that pass through the given type.",
        long,
        value_name="TYPE",
    )]
    through: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for PathsCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let query = PathsQuery {
            from: self.from,
            max_depth: self.max_depth,
            shortest: self.shortest,
            target: self.target,
            through: self.through,
        };
        log::debug!("Running {query:?}.");

        commands::run_query(
            &cli,
            "No paths found that match the filters.",
            |facade| facade.paths(&query),
        )
    }
}
