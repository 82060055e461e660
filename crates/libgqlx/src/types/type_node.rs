use crate::types::EnumValue;
use crate::types::FieldEdge;
use crate::types::TypeKind;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::OnceLock;

pub(crate) fn builtin_scalar_names() -> &'static [&'static str] {
    &["Boolean", "Float", "ID", "Int", "String"]
}

fn builtin_scalar_name_set() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| builtin_scalar_names().iter().copied().collect())
}

/// A named type definition in a [`Schema`](crate::Schema): its kind,
/// description, implemented interfaces and (depending on the kind) its
/// fields, enum values or union members.
///
/// Fields and enum values are kept in declaration order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeNode {
    pub(crate) description: Option<String>,
    pub(crate) enum_values: Vec<EnumValue>,
    pub(crate) fields: IndexMap<String, FieldEdge>,
    pub(crate) interface_names: Vec<String>,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
    pub(crate) union_member_names: Vec<String>,
}
impl TypeNode {
    pub(crate) fn new(
        name: impl Into<String>,
        kind: TypeKind,
        description: Option<String>,
    ) -> Self {
        Self {
            description: description.filter(|desc| !desc.trim().is_empty()),
            enum_values: vec![],
            fields: IndexMap::new(),
            interface_names: vec![],
            kind,
            name: name.into(),
            union_member_names: vec![],
        }
    }

    pub(crate) fn new_builtin_scalar(name: &str) -> Self {
        Self::new(name, TypeKind::Scalar, None)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_slice()
    }

    pub fn field(&self, name: &str) -> Option<&FieldEdge> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldEdge> {
        self.fields.values()
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interface_names.iter().any(|name| name == interface_name)
    }

    pub fn interface_names(&self) -> &[String] {
        self.interface_names.as_slice()
    }

    pub fn is_builtin(&self) -> bool {
        builtin_scalar_name_set().contains(self.name.as_str())
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn union_member_names(&self) -> &[String] {
        self.union_member_names.as_slice()
    }
}
