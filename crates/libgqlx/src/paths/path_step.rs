/// One hop of a [`DiscoveredPath`](crate::paths::DiscoveredPath): following
/// `field_name` on `type_name`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PathStep {
    pub(super) field_name: String,
    pub(super) has_arguments: bool,
    pub(super) type_name: String,
}
impl PathStep {
    pub fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        has_arguments: bool,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            has_arguments,
            type_name: type_name.into(),
        }
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn has_arguments(&self) -> bool {
        self.has_arguments
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl std::fmt::Display for PathStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)?;
        if self.has_arguments {
            f.write_str("(...)")?;
        }
        Ok(())
    }
}
