use crate::predicate::NameMatcher;
use crate::predicate::Nullability;
use crate::types::ArgumentRef;

#[derive(Clone, Debug, Default)]
pub struct ArgumentPredicate {
    deprecated: bool,
    has_description: bool,
    name: NameMatcher,
    nullability: Option<Nullability>,
    type_name: Option<String>,
}
impl ArgumentPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, arg: &ArgumentRef) -> bool {
        if self.deprecated && !arg.is_deprecated() {
            return false;
        }

        let arg_type = arg.type_annotation();
        if self.type_name.as_ref().is_some_and(|type_name| arg_type.innermost_type_name() != type_name.as_str()) {
            return false;
        }

        if self.nullability.is_some_and(|nullability| !nullability.matches(arg_type)) {
            return false;
        }

        if !self.name.matches(arg.name()) {
            return false;
        }

        !self.has_description || arg.description().is_some()
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
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

    pub fn with_type_name(mut self, type_name: Option<String>) -> Self {
        self.type_name = type_name;
        self
    }
}
