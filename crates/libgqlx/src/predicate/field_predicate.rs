use crate::predicate::NameMatcher;
use crate::predicate::Nullability;
use crate::types::FieldEdge;

#[derive(Clone, Debug, Default)]
pub struct FieldPredicate {
    deprecated: bool,
    has_arguments: Vec<String>,
    has_description: bool,
    name: NameMatcher,
    nullability: Option<Nullability>,
    returns: Option<String>,
}
impl FieldPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, field: &FieldEdge) -> bool {
        if self.deprecated && !field.is_deprecated() {
            return false;
        }

        if !self.has_arguments.iter().all(|arg_name| field.argument(arg_name).is_some()) {
            return false;
        }

        if self.returns.as_ref().is_some_and(|returns| field.return_type_name() != returns.as_str()) {
            return false;
        }

        if self.nullability.is_some_and(|nullability| !nullability.matches(field.type_annotation())) {
            return false;
        }

        if !self.name.matches(field.name()) {
            return false;
        }

        !self.has_description || field.description().is_some()
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn with_has_arguments(mut self, arg_names: Vec<String>) -> Self {
        self.has_arguments = arg_names;
        self
    }

    pub fn with_has_description(mut self, has_description: bool) -> Self {
        self.has_description = has_description;
        self
    }

    pub fn with_name_matcher(mut self, name: NameMatcher) -> Self {
        self.name = name;
        self
    }

    pub fn with_nullability(mut self, nullability: Option<Nullability>) -> Self {
        self.nullability = nullability;
        self
    }

    /// Matches on the base return type (`[Post!]!` returns `Post`).
    pub fn with_returns(mut self, type_name: Option<String>) -> Self {
        self.returns = type_name;
        self
    }
}
