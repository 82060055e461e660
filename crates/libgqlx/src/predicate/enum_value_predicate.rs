use crate::types::EnumValue;

#[derive(Clone, Copy, Debug, Default)]
pub struct EnumValuePredicate {
    deprecated: bool,
    has_description: bool,
}
impl EnumValuePredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, value: &EnumValue) -> bool {
        (!self.deprecated || value.is_deprecated())
            && (!self.has_description || value.description().is_some())
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn with_has_description(mut self, has_description: bool) -> Self {
        self.has_description = has_description;
        self
    }
}
