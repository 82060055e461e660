//! Immutable per-invocation option records, one per query.
//!
//! Every list-valued option treats an empty list as "not requested" and every
//! `Option` treats `None` the same way.

use crate::QueryError;
use crate::paths::DEFAULT_MAX_DEPTH;
use crate::predicate::NameMatcher;
use crate::predicate::Nullability;
use crate::query::ReferenceKind;
use crate::types::TypeKind;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypesQuery {
    pub has_description: bool,
    pub has_fields: Vec<String>,
    pub implements: Option<String>,
    pub kinds: Vec<TypeKind>,
    pub name_glob: Option<String>,
    pub name_regex: Option<String>,
    pub not_used_by: Vec<String>,
    pub not_used_by_all: Vec<String>,
    pub used_by: Vec<String>,
    pub used_by_any: Vec<String>,
}
impl TypesQuery {
    /// Checks option consistency without looking at any schema.
    pub fn validate(&self) -> Result<(), QueryError> {
        NameMatcher::new(self.name_glob.as_deref(), self.name_regex.as_deref())?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldsQuery {
    pub deprecated: bool,
    pub has_args: Vec<String>,
    pub has_description: bool,
    pub name_glob: Option<String>,
    pub name_regex: Option<String>,
    pub nullable: bool,
    pub required: bool,
    pub returns: Option<String>,

    /// Restricts the listing to one type. Records then omit the type name.
    pub type_name: Option<String>,
}
impl FieldsQuery {
    /// Checks option consistency without looking at any schema.
    pub fn validate(&self) -> Result<(), QueryError> {
        Nullability::from_flags(self.required, self.nullable)?;
        NameMatcher::new(self.name_glob.as_deref(), self.name_regex.as_deref())?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArgsQuery {
    pub deprecated: bool,

    /// Restricts the listing to one field, written `Type.field`.
    pub field: Option<String>,

    pub has_description: bool,
    pub name_glob: Option<String>,
    pub name_regex: Option<String>,
    pub nullable: bool,
    pub required: bool,
    pub type_name: Option<String>,
}
impl ArgsQuery {
    /// Checks option consistency without looking at any schema.
    pub fn validate(&self) -> Result<(), QueryError> {
        Nullability::from_flags(self.required, self.nullable)?;
        NameMatcher::new(self.name_glob.as_deref(), self.name_regex.as_deref())?;
        if let Some(field) = &self.field {
            parse_field_spec(field)?;
        }
        Ok(())
    }
}

/// Splits a `Type.field` reference into its two names.
pub(crate) fn parse_field_spec(spec: &str) -> Result<(&str, &str), QueryError> {
    match spec.split('.').collect::<Vec<_>>().as_slice() {
        [type_name, field_name] if !type_name.is_empty() && !field_name.is_empty() =>
            Ok((*type_name, *field_name)),
        _ => Err(QueryError::Configuration(
            "field must be specified as Type.field (e.g., Query.user)".to_string(),
        )),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathsQuery {
    /// Start type; the schema's query root type when unset.
    pub from: Option<String>,
    pub max_depth: usize,
    pub shortest: bool,
    pub target: String,
    pub through: Option<String>,
}
impl PathsQuery {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            from: None,
            max_depth: DEFAULT_MAX_DEPTH,
            shortest: false,
            target: target.into(),
            through: None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferencesQuery {
    pub in_type: Option<String>,
    pub kind: Option<ReferenceKind>,
    pub target: String,
}
impl ReferencesQuery {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            in_type: None,
            kind: None,
            target: target.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValuesQuery {
    pub deprecated: bool,

    /// Restricts the listing to one enum. Records then omit the enum name.
    pub enum_name: Option<String>,

    pub has_description: bool,
}
