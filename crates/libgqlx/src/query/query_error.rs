use crate::types::TypeKind;
use thiserror::Error;

/// Errors raised while validating or executing a query against a loaded
/// [`Schema`](crate::Schema). None of them carry partial results.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueryError {
    /// The query options themselves are unusable (mutually exclusive flags,
    /// a malformed glob or regex, a malformed `Type.field` reference...).
    #[error("{0}")]
    Configuration(String),

    #[error(
        "'{name}' is not {} (it's {})",
        with_article(*expected),
        with_article(*actual),
    )]
    KindMismatch {
        name: String,
        expected: TypeKind,
        actual: TypeKind,
    },

    #[error(
        "field '{field_name}' does not exist on type '{type_name}'{}",
        suggestion_suffix(suggestion),
    )]
    UnknownField {
        type_name: String,
        field_name: String,
        suggestion: Option<String>,
    },

    #[error(
        "{context} '{name}' does not exist in schema{}",
        suggestion_suffix(suggestion),
    )]
    UnknownType {
        context: String,
        name: String,
        suggestion: Option<String>,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(suggestion) => format!(", did you mean '{suggestion}'?"),
        None => String::new(),
    }
}

fn with_article(kind: TypeKind) -> String {
    let keyword = kind.sdl_keyword();
    match keyword.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("an {keyword}"),
        _ => format!("a {keyword}"),
    }
}
