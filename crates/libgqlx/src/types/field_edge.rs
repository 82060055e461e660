use crate::ast;
use crate::types::ArgumentRef;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use crate::types::argument_ref::non_empty;
use crate::types::graphql_value;

/// Represents a field declared on an object, interface or input object
/// type. Following the field leads from its declaring type to the base type
/// of its [`TypeAnnotation`], which is what makes it an edge in the schema's
/// relationship graph.
///
/// Input object fields are modelled as edges without arguments; they are
/// the only edges that may carry a default value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldEdge {
    pub(super) arguments: Vec<ArgumentRef>,
    pub(super) declaring_type_name: String,
    pub(super) default_value: Option<String>,
    pub(super) deprecation_state: DeprecationState,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: TypeAnnotation,
}
impl FieldEdge {
    pub(crate) fn from_ast_field(
        declaring_type_name: &str,
        field: &ast::schema::Field,
    ) -> Self {
        Self {
            arguments: field.arguments.iter()
                .map(ArgumentRef::from_ast)
                .collect(),
            declaring_type_name: declaring_type_name.to_string(),
            default_value: None,
            deprecation_state: field.directives.as_slice().into(),
            description: non_empty(field.description.as_deref()),
            name: field.name.to_owned(),
            type_ref: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    pub(crate) fn from_ast_input_field(
        declaring_type_name: &str,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Self {
            arguments: vec![],
            declaring_type_name: declaring_type_name.to_string(),
            default_value: input_val.default_value
                .as_ref()
                .map(graphql_value::to_graphql_string),
            deprecation_state: input_val.directives.as_slice().into(),
            description: non_empty(input_val.description.as_deref()),
            name: input_val.name.to_owned(),
            type_ref: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentRef> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    pub fn arguments(&self) -> &[ArgumentRef] {
        self.arguments.as_slice()
    }

    pub fn declaring_type_name(&self) -> &str {
        self.declaring_type_name.as_str()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_state.is_deprecated()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The base type this field returns once list and non-null wrappers are
    /// stripped.
    pub fn return_type_name(&self) -> &str {
        self.type_ref.innermost_type_name()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_ref
    }
}
