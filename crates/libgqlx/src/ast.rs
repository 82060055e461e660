use std::path::PathBuf;

pub mod query {
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
}

pub mod schema {
    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
}

/// Represents a location in a schema file.
///
/// Very similar to graphql_parser::Pos, but also includes a path to the
/// relevant file (or a synthetic `str://N` path for schemas loaded from
/// strings).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FileLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}
impl FileLocation {
    pub(crate) fn from_pos(file: PathBuf, pos: graphql_parser::Pos) -> Self {
        Self {
            file,
            line: pos.line,
            column: pos.column,
        }
    }
}
impl std::fmt::Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
