mod args;
mod fields;
mod paths;
mod references;
mod types;
mod values;

use crate::Cli;
use crate::CommandResult;
use crate::output_utils;
use crate::render;
use crate::render::Renderable;
use crate::schema_loader;
use args::ArgsCmd;
use fields::FieldsCmd;
use libgqlx::QueryError;
use libgqlx::QueryFacade;
use paths::PathsCmd;
use references::ReferencesCmd;
use types::TypesCmd;
use values::ValuesCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlx")]
pub(crate) enum CommandEnum {
    /// List arguments of one field (`Type.field`) or of every field.
    Args(Box<ArgsCmd>),

    /// List fields of one type or of every type.
    Fields(Box<FieldsCmd>),

    /// List every field path from a root type to a given type.
    Paths(Box<PathsCmd>),

    /// Show which fields return a type and which arguments accept it.
    References(Box<ReferencesCmd>),

    /// List the types that match a set of filters.
    Types(Box<TypesCmd>),

    /// List values of one enum or of every enum.
    Values(Box<ValuesCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Args(cmd) => cmd.run(cli).await,
            Self::Fields(cmd) => cmd.run(cli).await,
            Self::Paths(cmd) => cmd.run(cli).await,
            Self::References(cmd) => cmd.run(cli).await,
            Self::Types(cmd) => cmd.run(cli).await,
            Self::Values(cmd) => cmd.run(cli).await,
        }
    }
}

/// Loads the schema named by `cli`, runs `query` against it and renders the
/// resulting records. `empty_notice` goes to stderr when nothing matched.
fn run_query<R, F>(cli: &Cli, empty_notice: &str, query: F) -> CommandResult
where
    R: Renderable,
    F: FnOnce(&QueryFacade<'_>) -> Result<Vec<R>, QueryError>,
{
    let schema = match schema_loader::load_schema(cli.schema.as_path()) {
        Ok(schema) => schema,
        Err(err) => return failure(err),
    };

    let records = match query(&QueryFacade::new(&schema)) {
        Ok(records) => records,
        Err(err) => return failure(err),
    };

    let output = match render::render(&records, cli.output_format()) {
        Ok(output) => output,
        Err(err) => return failure(err.context("error rendering output")),
    };

    let result =
        if output.is_empty() {
            CommandResult::success()
        } else {
            CommandResult::stdout(format_args!("{output}"))
        };

    if records.is_empty() {
        result.with_notice(empty_notice)
    } else {
        result
    }
}

fn failure(err: impl Into<anyhow::Error>) -> CommandResult {
    let err = err.into();
    CommandResult::stderr(format_args!("{} {err:#}", output_utils::RED_X))
}
