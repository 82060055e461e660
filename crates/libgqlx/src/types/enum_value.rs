use crate::ast;
use crate::types::DeprecationState;
use crate::types::argument_ref::non_empty;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue {
    pub(super) deprecation_state: DeprecationState,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl EnumValue {
    pub(crate) fn from_ast(value: &ast::schema::EnumValue) -> Self {
        Self {
            deprecation_state: value.directives.as_slice().into(),
            description: non_empty(value.description.as_deref()),
            name: value.name.to_owned(),
        }
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
}
