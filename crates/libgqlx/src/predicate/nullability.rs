use crate::QueryError;
use crate::types::TypeAnnotation;

/// Filters on the outermost non-null marker of a type annotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nullability {
    /// `T!`, `[T]!`, ...
    Required,
    Nullable,
}
impl Nullability {
    /// Combines the mutually exclusive `--required` / `--nullable` flags.
    pub fn from_flags(
        required: bool,
        nullable: bool,
    ) -> Result<Option<Self>, QueryError> {
        match (required, nullable) {
            (true, true) => Err(QueryError::Configuration(
                "--required and --nullable cannot be used together".to_string(),
            )),
            (true, false) => Ok(Some(Self::Required)),
            (false, true) => Ok(Some(Self::Nullable)),
            (false, false) => Ok(None),
        }
    }

    pub fn matches(&self, type_annot: &TypeAnnotation) -> bool {
        match self {
            Self::Required => !type_annot.nullable(),
            Self::Nullable => type_annot.nullable(),
        }
    }
}
