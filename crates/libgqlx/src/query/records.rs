use crate::QueryError;
use crate::paths::DiscoveredPath;
use crate::types::ArgumentRef;
use crate::types::EnumValue;
use crate::types::FieldEdge;
use crate::types::TypeKind;
use crate::types::TypeNode;
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    pub name: String,
    pub kind: TypeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
impl TypeInfo {
    pub(crate) fn from_type_node(type_node: &TypeNode) -> Self {
        Self {
            name: type_node.name().to_string(),
            kind: type_node.kind(),
            description: type_node.description().map(str::to_string),
        }
    }
}

/// Name and rendered type of one argument of a [`FieldInfo`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ArgumentSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub type_annotation: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ArgumentSummary>,
    #[serde(rename = "type")]
    pub type_annotation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
impl FieldInfo {
    pub(crate) fn from_field(field: &FieldEdge, qualified: bool) -> Self {
        Self {
            type_name: qualified.then(|| field.declaring_type_name().to_string()),
            name: field.name().to_string(),
            arguments: field.arguments().iter()
                .map(|arg| ArgumentSummary {
                    name: arg.name().to_string(),
                    type_annotation: arg.type_annotation().to_string(),
                })
                .collect(),
            type_annotation: field.type_annotation().to_string(),
            default_value: field.default_value().map(str::to_string),
            description: field.description().map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_annotation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
impl ArgInfo {
    pub(crate) fn from_argument(
        field: &FieldEdge,
        arg: &ArgumentRef,
        qualified: bool,
    ) -> Self {
        Self {
            type_name: qualified.then(|| field.declaring_type_name().to_string()),
            field_name: qualified.then(|| field.name().to_string()),
            name: arg.name().to_string(),
            type_annotation: arg.type_annotation().to_string(),
            default_value: arg.default_value().map(str::to_string),
            description: arg.description().map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PathInfo {
    pub path: String,
}
impl std::convert::From<&DiscoveredPath> for PathInfo {
    fn from(path: &DiscoveredPath) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// A field whose return type is the referenced type.
    Field,

    /// An argument whose type is the referenced type.
    Argument,
}
impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Field => "field",
            Self::Argument => "argument",
        })
    }
}
impl std::str::FromStr for ReferenceKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field" => Ok(Self::Field),
            "argument" => Ok(Self::Argument),
            _ => Err(QueryError::Configuration(format!(
                "--kind must be 'field' or 'argument', got '{s}'",
            ))),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReferenceInfo {
    /// `Type.field` for fields, `Type.field.arg` for arguments.
    pub location: String,
    pub kind: ReferenceKind,
    #[serde(rename = "type")]
    pub type_annotation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
impl ValueInfo {
    pub(crate) fn from_enum_value(
        enum_name: &str,
        value: &EnumValue,
        qualified: bool,
    ) -> Self {
        Self {
            enum_name: qualified.then(|| enum_name.to_string()),
            name: value.name().to_string(),
            description: value.description().map(str::to_string),
        }
    }
}
