use crate::paths::PathStep;

/// A chain of field hops ending at a target type.
///
/// Renders as `Query.user(...) -> User.posts -> Post`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DiscoveredPath {
    pub(super) steps: Vec<PathStep>,
    pub(super) target: String,
}
impl DiscoveredPath {
    pub fn new(steps: Vec<PathStep>, target: impl Into<String>) -> Self {
        Self {
            steps,
            target: target.into(),
        }
    }

    pub fn hop_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether any hop starts from `type_name`.
    pub fn passes_through(&self, type_name: &str) -> bool {
        self.steps.iter().any(|step| step.type_name() == type_name)
    }

    pub fn steps(&self) -> &[PathStep] {
        self.steps.as_slice()
    }

    pub fn target(&self) -> &str {
        self.target.as_str()
    }
}
impl std::fmt::Display for DiscoveredPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "{step} -> ")?;
        }
        f.write_str(self.target.as_str())
    }
}
