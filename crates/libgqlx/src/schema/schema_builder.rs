use crate::ast;
use crate::ast::FileLocation;
use crate::file_reader;
use crate::ReadContentError;
use crate::schema::Schema;
use crate::types::EnumValue;
use crate::types::FieldEdge;
use crate::types::TypeKind;
use crate::types::TypeNode;
use crate::types::builtin_scalar_names;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RootOperation {
    Query,
    Mutation,
    Subscription,
}
impl RootOperation {
    fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for RootOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: FileLocation,
    pub type_name: String,
}

#[derive(Debug)]
struct PendingExtension {
    extension: ast::schema::TypeExtension,
    file_path: PathBuf,
}

/// Utility for building a [Schema].
///
/// Schema text is parsed with `graphql_parser` and converted into
/// [`TypeNode`]s as each document is loaded. Type extensions are queued and
/// merged into their base definitions during [`SchemaBuilder::build()`] so
/// that an extension may be loaded before the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<PendingExtension>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    type_def_locations: IndexMap<String, FileLocation>,
    types: IndexMap<String, TypeNode>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_builtin_scalars();

        for pending in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(
                pending.file_path.as_path(),
                pending.extension,
            )?;
        }

        let query_type_name = self.resolve_root_type(RootOperation::Query)?
            .unwrap_or_else(|| RootOperation::Query.default_type_name().to_string());
        let mutation_type_name = self.resolve_root_type(RootOperation::Mutation)?;
        let subscription_type_name = self.resolve_root_type(RootOperation::Subscription)?;

        log::debug!(
            "Built schema with {} types (query root: `{query_type_name}`).",
            self.types.len(),
        );

        Ok(Schema {
            mutation_type_name,
            query_type_name,
            subscription_type_name,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            type_def_locations: IndexMap::new(),
            types: IndexMap::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::debug!("Loading schema file {file_path:#?}...");
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position, kind) = match &ext {
            TypeExtension::Scalar(ext) => (&ext.name, ext.position, TypeKind::Scalar),
            TypeExtension::Object(ext) => (&ext.name, ext.position, TypeKind::Object),
            TypeExtension::Interface(ext) => (&ext.name, ext.position, TypeKind::Interface),
            TypeExtension::Union(ext) => (&ext.name, ext.position, TypeKind::Union),
            TypeExtension::Enum(ext) => (&ext.name, ext.position, TypeKind::Enum),
            TypeExtension::InputObject(ext) => (&ext.name, ext.position, TypeKind::InputObject),
        };
        let location = FileLocation::from_pos(file_path.to_path_buf(), position);

        let Some(type_node) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                location,
                type_name: type_name.to_string(),
            });
        };

        if type_node.kind() != kind {
            return Err(SchemaBuildError::InvalidExtensionKind {
                extension_kind: kind,
                location,
                type_kind: type_node.kind(),
                type_name: type_name.to_string(),
            });
        }

        log::trace!("Merging `extend {kind} {type_name}` from {location}.");
        match ext {
            TypeExtension::Scalar(_) => (),

            TypeExtension::Object(ext) => {
                for iface_name in ext.implements_interfaces {
                    if !type_node.implements(iface_name.as_str()) {
                        type_node.interface_names.push(iface_name);
                    }
                }
                add_output_fields(file_path, type_node, &ext.fields)?;
            },

            TypeExtension::Interface(ext) =>
                add_output_fields(file_path, type_node, &ext.fields)?,

            TypeExtension::Union(ext) => {
                for member_name in ext.types {
                    if !type_node.union_member_names.contains(&member_name) {
                        type_node.union_member_names.push(member_name);
                    }
                }
            },

            TypeExtension::Enum(ext) =>
                add_enum_values(file_path, type_node, &ext.values)?,

            TypeExtension::InputObject(ext) =>
                add_input_fields(file_path, type_node, &ext.fields)?,
        }

        Ok(())
    }

    fn inject_builtin_scalars(&mut self) {
        for name in builtin_scalar_names() {
            if !self.types.contains_key(*name) {
                self.types.insert(
                    name.to_string(),
                    TypeNode::new_builtin_scalar(name),
                );
            }
        }
    }

    fn resolve_root_type(
        &self,
        operation: RootOperation,
    ) -> Result<Option<String>> {
        let explicit = match operation {
            RootOperation::Query => &self.query_type,
            RootOperation::Mutation => &self.mutation_type,
            RootOperation::Subscription => &self.subscription_type,
        };

        if let Some(typedef_loc) = explicit {
            return match self.types.get(typedef_loc.type_name.as_str()) {
                Some(type_node) if type_node.kind() == TypeKind::Object =>
                    Ok(Some(typedef_loc.type_name.to_owned())),

                _ => Err(SchemaBuildError::UndefinedRootOperationType {
                    location: typedef_loc.def_location.to_owned(),
                    operation,
                    type_name: typedef_loc.type_name.to_owned(),
                }),
            };
        }

        let default_name = operation.default_type_name();
        match self.types.get(default_name) {
            Some(type_node) if type_node.kind() == TypeKind::Object =>
                Ok(Some(default_name.to_string())),
            _ => Ok(None),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(extension) => {
                self.pending_extensions.push(PendingExtension {
                    extension,
                    file_path: file_path.to_path_buf(),
                });
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "Ignoring definition of the `@{}` directive.",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let roots = [
            (RootOperation::Query, schema_def.query),
            (RootOperation::Mutation, schema_def.mutation),
            (RootOperation::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: FileLocation::from_pos(
                    file_path.to_path_buf(),
                    schema_def.position,
                ),
                type_name,
            };
            let slot = match operation {
                RootOperation::Query => &mut self.query_type,
                RootOperation::Mutation => &mut self.mutation_type,
                RootOperation::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (type_name, position) = match &type_def {
            TypeDefinition::Scalar(def) => (&def.name, def.position),
            TypeDefinition::Object(def) => (&def.name, def.position),
            TypeDefinition::Interface(def) => (&def.name, def.position),
            TypeDefinition::Union(def) => (&def.name, def.position),
            TypeDefinition::Enum(def) => (&def.name, def.position),
            TypeDefinition::InputObject(def) => (&def.name, def.position),
        };
        let type_name = type_name.to_string();
        let location = FileLocation::from_pos(file_path.to_path_buf(), position);

        if builtin_scalar_names().iter().any(|name| *name == type_name) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinType {
                location,
                type_name,
            });
        }

        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                location,
                type_name,
            });
        }

        if let Some(def1) = self.type_def_locations.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: def1.clone(),
                def2: location,
                type_name,
            });
        }

        let type_node = match type_def {
            TypeDefinition::Scalar(def) =>
                TypeNode::new(def.name, TypeKind::Scalar, def.description),

            TypeDefinition::Object(def) => {
                let mut type_node =
                    TypeNode::new(def.name, TypeKind::Object, def.description);
                type_node.interface_names = def.implements_interfaces;
                add_output_fields(file_path, &mut type_node, &def.fields)?;
                type_node
            },

            TypeDefinition::Interface(def) => {
                let mut type_node =
                    TypeNode::new(def.name, TypeKind::Interface, def.description);
                type_node.interface_names = def.implements_interfaces;
                add_output_fields(file_path, &mut type_node, &def.fields)?;
                type_node
            },

            TypeDefinition::Union(def) => {
                let mut type_node =
                    TypeNode::new(def.name, TypeKind::Union, def.description);
                type_node.union_member_names = def.types;
                type_node
            },

            TypeDefinition::Enum(def) => {
                let mut type_node =
                    TypeNode::new(def.name, TypeKind::Enum, def.description);
                add_enum_values(file_path, &mut type_node, &def.values)?;
                type_node
            },

            TypeDefinition::InputObject(def) => {
                let mut type_node =
                    TypeNode::new(def.name, TypeKind::InputObject, def.description);
                add_input_fields(file_path, &mut type_node, &def.fields)?;
                type_node
            },
        };

        log::trace!("Loaded {} `{type_name}` from {location}.", type_node.kind());
        self.type_def_locations.insert(type_name.to_owned(), location);
        self.types.insert(type_name, type_node);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_enum_values(
    file_path: &Path,
    type_node: &mut TypeNode,
    values: &[ast::schema::EnumValue],
) -> Result<()> {
    for value in values {
        if type_node.enum_values.iter().any(|existing| existing.name() == value.name) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: type_node.name().to_string(),
                location: FileLocation::from_pos(file_path.to_path_buf(), value.position),
                value_name: value.name.to_owned(),
            });
        }
        type_node.enum_values.push(EnumValue::from_ast(value));
    }
    Ok(())
}

fn add_field_edge(
    file_path: &Path,
    type_node: &mut TypeNode,
    field: FieldEdge,
    position: graphql_parser::Pos,
) -> Result<()> {
    if type_node.has_field(field.name()) {
        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
            field_name: field.name().to_string(),
            location: FileLocation::from_pos(file_path.to_path_buf(), position),
            type_name: type_node.name().to_string(),
        });
    }
    type_node.fields.insert(field.name().to_string(), field);
    Ok(())
}

fn add_input_fields(
    file_path: &Path,
    type_node: &mut TypeNode,
    fields: &[ast::schema::InputValue],
) -> Result<()> {
    for input_val in fields {
        let field = FieldEdge::from_ast_input_field(type_node.name(), input_val);
        add_field_edge(file_path, type_node, field, input_val.position)?;
    }
    Ok(())
}

fn add_output_fields(
    file_path: &Path,
    type_node: &mut TypeNode,
    fields: &[ast::schema::Field],
) -> Result<()> {
    for ast_field in fields {
        let field = FieldEdge::from_ast_field(type_node.name(), ast_field);
        add_field_edge(file_path, type_node, field, ast_field.position)?;
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{enum_name}` enum defines the `{value_name}` value more than \
        once ({location})"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        location: FileLocation,
        value_name: String,
    },

    #[error(
        "The `{type_name}` type defines the `{field_name}` field more than \
        once ({location})"
    )]
    DuplicateFieldNameDefinition {
        field_name: String,
        location: FileLocation,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type was defined more than once \
        ({} and {})",
        location1.def_location,
        location2.def_location,
    )]
    DuplicateOperationDefinition {
        operation: RootOperation,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        def1: FileLocation,
        def2: FileLocation,
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined ({location})")]
    ExtensionOfUndefinedType {
        location: FileLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` as an {extension_kind} type, but it \
        is defined as a {type_kind} type ({location})"
    )]
    InvalidExtensionKind {
        extension_kind: TypeKind,
        location: FileLocation,
        type_kind: TypeKind,
        type_name: String,
    },

    #[error(
        "Type names starting with `__` are reserved for introspection: \
        `{type_name}` ({location})"
    )]
    InvalidDunderPrefixedTypeName {
        location: FileLocation,
        type_name: String,
    },

    #[error("GraphQL schema parsing error in {}: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("The built-in `{type_name}` scalar can not be redefined ({location})")]
    RedefinitionOfBuiltinType {
        location: FileLocation,
        type_name: String,
    },

    #[error("{0}")]
    SchemaFileReadError(Box<ReadContentError>),

    #[error(
        "The {operation} root operation type `{type_name}` is not a defined \
        object type ({location})"
    )]
    UndefinedRootOperationType {
        location: FileLocation,
        operation: RootOperation,
        type_name: String,
    },
}
