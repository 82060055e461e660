use crate::QueryError;
use crate::Schema;
use crate::types::TypeNode;
use std::collections::BTreeSet;

/// Answers "which types does this type use?" for a [`Schema`].
///
/// A type uses every base type named by its fields' return types and by
/// those fields' arguments. Self-references count.
#[derive(Clone, Copy, Debug)]
pub struct UsageIndex<'schema> {
    schema: &'schema Schema,
}
impl<'schema> UsageIndex<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Computes the [`UsageSet`] of the type named `type_name`.
    ///
    /// Unknown names are an error rather than an empty set.
    pub fn usage_set(
        &self,
        type_name: &str,
    ) -> Result<UsageSet<'schema>, QueryError> {
        let type_node = self.schema.require_type(type_name, "type")?;
        Ok(UsageSet::of(type_node))
    }
}

/// The set of type names used by one reference type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UsageSet<'schema> {
    reference_type_name: &'schema str,
    used_type_names: BTreeSet<&'schema str>,
}
impl<'schema> UsageSet<'schema> {
    fn of(type_node: &'schema TypeNode) -> Self {
        let mut used_type_names = BTreeSet::new();
        for field in type_node.fields() {
            used_type_names.insert(field.return_type_name());
            for arg in field.arguments() {
                used_type_names.insert(arg.type_annotation().innermost_type_name());
            }
        }

        log::trace!(
            "`{}` uses {} type(s).",
            type_node.name(),
            used_type_names.len(),
        );

        Self {
            reference_type_name: type_node.name(),
            used_type_names,
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.used_type_names.contains(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.used_type_names.is_empty()
    }

    /// Used type names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &'schema str> + '_ {
        self.used_type_names.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.used_type_names.len()
    }

    pub fn reference_type_name(&self) -> &'schema str {
        self.reference_type_name
    }
}
