use crate::predicate::NameMatcher;
use crate::types::TypeKind;
use crate::types::TypeNode;
use crate::usage::UsageFilter;
use std::collections::BTreeSet;

/// Type-level filter.
///
/// The usage dimension holds [`UsageFilter`]s that borrow from the schema,
/// hence the lifetime.
#[derive(Clone, Debug, Default)]
pub struct TypePredicate<'schema> {
    has_description: bool,
    has_fields: Vec<String>,
    implements: Option<String>,
    kinds: BTreeSet<TypeKind>,
    name: NameMatcher,
    usage_filters: Vec<UsageFilter<'schema>>,
}
impl<'schema> TypePredicate<'schema> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, type_node: &TypeNode) -> bool {
        if !self.kinds.is_empty() && !self.kinds.contains(&type_node.kind()) {
            return false;
        }

        if self.implements.as_ref().is_some_and(|iface_name| !type_node.implements(iface_name)) {
            return false;
        }

        if !self.has_fields.iter().all(|field_name| type_node.has_field(field_name)) {
            return false;
        }

        if !self.usage_filters.iter().all(|filter| filter.matches(type_node.name())) {
            return false;
        }

        if !self.name.matches(type_node.name()) {
            return false;
        }

        !self.has_description || type_node.has_description()
    }

    pub fn with_has_description(mut self, has_description: bool) -> Self {
        self.has_description = has_description;
        self
    }

    /// Every listed field name must be declared on the type.
    pub fn with_has_fields(mut self, field_names: Vec<String>) -> Self {
        self.has_fields = field_names;
        self
    }

    pub fn with_implements(mut self, iface_name: Option<String>) -> Self {
        self.implements = iface_name;
        self
    }

    /// A type matches when its kind is any of `kinds`. An empty set
    /// leaves the dimension inactive.
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = TypeKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    pub fn with_name_matcher(mut self, name: NameMatcher) -> Self {
        self.name = name;
        self
    }

    pub fn with_usage_filter(mut self, filter: Option<UsageFilter<'schema>>) -> Self {
        self.usage_filters.extend(filter);
        self
    }
}
