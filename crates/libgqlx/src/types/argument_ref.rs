use crate::ast;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use crate::types::graphql_value;

/// An argument declared on a [`FieldEdge`](crate::types::FieldEdge).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArgumentRef {
    pub(super) default_value: Option<String>,
    pub(super) deprecation_state: DeprecationState,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: TypeAnnotation,
}
impl ArgumentRef {
    pub(crate) fn from_ast(input_val: &ast::schema::InputValue) -> Self {
        Self {
            default_value: input_val.default_value
                .as_ref()
                .map(graphql_value::to_graphql_string),
            deprecation_state: input_val.directives.as_slice().into(),
            description: non_empty(input_val.description.as_deref()),
            name: input_val.name.to_owned(),
            type_ref: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    /// The default value rendered in GraphQL literal syntax.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_state.is_deprecated()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_ref
    }
}

/// Blank descriptions count as no description at all.
pub(super) fn non_empty(description: Option<&str>) -> Option<String> {
    description
        .filter(|desc| !desc.trim().is_empty())
        .map(str::to_string)
}
