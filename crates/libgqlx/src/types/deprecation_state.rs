use crate::ast;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeprecationState {
    Deprecated(String),
    NotDeprecated,
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => Some(reason.as_str()),
            Self::NotDeprecated => None,
        }
    }
}

impl std::convert::From<&[ast::query::Directive]> for DeprecationState {
    fn from(value: &[ast::query::Directive]) -> DeprecationState {
        let directive_annot = value.iter().find(|directive_annot| {
            directive_annot.name == "deprecated"
        });
        let Some(directive_annot) = directive_annot else {
            return DeprecationState::NotDeprecated;
        };

        let reason = directive_annot.arguments.iter()
            .find(|(arg_name, _)| arg_name == "reason")
            .and_then(|(_, value)| match value {
                ast::query::Value::String(reason) => Some(reason.to_owned()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string());
        DeprecationState::Deprecated(reason)
    }
}
