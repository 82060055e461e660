use clap::CommandFactory;
use crate::commands;
use crate::output_format::OutputFormat;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlx",
    version,
    about = "Explore the types, fields and relationships of a GraphQL schema.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Output format. Defaults to `pretty` when writing to a terminal \
             and `text` otherwise.",
        ignore_case=true,
        long,
        short='f',
        value_enum,
    )]
    pub format: Option<OutputFormat>,

    #[arg(
        default_value="schema.graphql",
        global=true,
        help="Path to a GraphQL schema file, or to a directory of \
             `.graphql`/`.graphqls` files.",
        long,
        short='s',
    )]
    pub schema: PathBuf,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_else(OutputFormat::detect)
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
