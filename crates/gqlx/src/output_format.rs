use std::io::IsTerminal;

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Indented JSON array of records.
    Json,

    /// A table with a header row.
    Pretty,

    /// One line per record.
    Text,
}
impl OutputFormat {
    pub(crate) fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Text
        }
    }
}
