use crate::QueryError;

/// The category of a [`TypeNode`](crate::types::TypeNode).
///
/// Serializes using the introspection spelling (`OBJECT`, `INPUT_OBJECT`,
/// ...) while [`Display`](std::fmt::Display) uses the SDL keyword that
/// declares a type of this kind (`type`, `input`, ...).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}
impl TypeKind {
    pub const ALL: [TypeKind; 6] = [
        TypeKind::Scalar,
        TypeKind::Object,
        TypeKind::Interface,
        TypeKind::Union,
        TypeKind::Enum,
        TypeKind::InputObject,
    ];

    /// Resolves a user-supplied kind name. Matching is case-insensitive and
    /// accepts the SDL keyword, the introspection name and a few common
    /// aliases (`object` for `type`, `input_object` for `input`).
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_ascii_lowercase().as_str() {
            "scalar" => Some(Self::Scalar),
            "type" | "object" => Some(Self::Object),
            "interface" => Some(Self::Interface),
            "union" => Some(Self::Union),
            "enum" => Some(Self::Enum),
            "input" | "input_object" | "inputobject" => Some(Self::InputObject),
            _ => None,
        }
    }

    pub fn introspection_name(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
        }
    }

    pub fn sdl_keyword(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object => "type",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::InputObject => "input",
        }
    }

    /// Only object and interface types have fields that can be traversed
    /// when searching for reachability paths.
    pub fn has_output_fields(&self) -> bool {
        matches!(self, Self::Object | Self::Interface)
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sdl_keyword())
    }
}
impl std::str::FromStr for TypeKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| QueryError::Configuration(format!(
            "unknown kind '{s}' (valid kinds: scalar, type, interface, union, \
            enum, input)",
        )))
    }
}
