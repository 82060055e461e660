use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgqlx::query::ReferenceKind;
use libgqlx::query::ReferencesQuery;

#[derive(Debug, clap::Args)]
pub(crate) struct ReferencesCmd {
    #[arg(
        help="Only show references declared on the given type.",
        long="in",
        value_name="TYPE",
    )]
    in_type: Option<String>,

    #[arg(
        help="Only show references of this kind: `field` or `argument`.",
        long,
        value_name="KIND",
    )]
    kind: Option<String>,

    #[arg(help="The type to find references to.", value_name="TYPE")]
    target: String,
}

#[inherent::inherent]
impl RunnableCommand for ReferencesCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let kind = match self.kind.as_deref().map(str::parse::<ReferenceKind>).transpose() {
            Ok(kind) => kind,
            Err(err) => return commands::failure(err),
        };

        let query = ReferencesQuery {
            in_type: self.in_type,
            kind,
            target: self.target,
        };
        log::debug!("Running {query:?}.");

        commands::run_query(
            &cli,
            "No references found.",
            |facade| facade.references(&query),
        )
    }
}
