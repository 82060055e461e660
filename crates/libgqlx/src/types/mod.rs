mod argument_ref;
mod deprecation_state;
mod enum_value;
mod field_edge;
mod graphql_value;
mod list_type_annotation;
mod named_type_annotation;
mod type_annotation;
mod type_kind;
mod type_node;

pub use argument_ref::ArgumentRef;
pub use deprecation_state::DeprecationState;
pub use enum_value::EnumValue;
pub use field_edge::FieldEdge;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_kind::TypeKind;
pub use type_node::TypeNode;

pub(crate) use type_node::builtin_scalar_names;
