use crate::QueryError;
use crate::ReadContentError;
use crate::ast::FileLocation;
use crate::schema::RootOperation;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::TypeKind;
use std::io::Write;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load_has_only_builtin_scalars() -> Result<()> {
        let schema = SchemaBuilder::new().build()?;

        let mut names: Vec<&str> = schema.all_types().keys()
            .map(String::as_str)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Boolean", "Float", "ID", "Int", "String"]);
        assert!(schema.all_types().values().all(|t| t.is_builtin()));
        assert_eq!(schema.query_type_name(), "Query");
        assert!(schema.mutation_type_name().is_none());
        assert!(schema.subscription_type_name().is_none());

        Ok(())
    }

    #[test]
    fn load_all_kinds_of_type_definitions() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "scalar DateTime\n",
                "interface Node { id: ID! }\n",
                "\"A user in the system\"\n",
                "type User implements Node { id: ID! name: String }\n",
                "union SearchResult = User\n",
                "enum Status { ACTIVE INACTIVE }\n",
                "input CreateUserInput { name: String! = \"anon\" }\n",
                "type Query { user(id: ID!): User }\n",
            ))?
            .build()?;

        let kind_of = |name: &str| schema.type_node(name).map(|t| t.kind());
        assert_eq!(kind_of("DateTime"), Some(TypeKind::Scalar));
        assert_eq!(kind_of("Node"), Some(TypeKind::Interface));
        assert_eq!(kind_of("User"), Some(TypeKind::Object));
        assert_eq!(kind_of("SearchResult"), Some(TypeKind::Union));
        assert_eq!(kind_of("Status"), Some(TypeKind::Enum));
        assert_eq!(kind_of("CreateUserInput"), Some(TypeKind::InputObject));
        assert_eq!(kind_of("Missing"), None);

        let user = schema.type_node("User").expect("User is defined");
        assert_eq!(user.description(), Some("A user in the system"));
        assert_eq!(user.interface_names(), &["Node".to_string()]);
        assert_eq!(user.field_names().collect::<Vec<_>>(), vec!["id", "name"]);

        let union_type = schema.type_node("SearchResult").expect("union is defined");
        assert_eq!(union_type.union_member_names(), &["User".to_string()]);

        let status = schema.type_node("Status").expect("enum is defined");
        assert_eq!(
            status.enum_values().iter().map(|v| v.name()).collect::<Vec<_>>(),
            vec!["ACTIVE", "INACTIVE"],
        );

        let input = schema.type_node("CreateUserInput").expect("input is defined");
        let name_field = input.field("name").expect("input field is defined");
        assert_eq!(name_field.default_value(), Some("\"anon\""));
        assert_eq!(name_field.type_annotation().to_string(), "String!");
        assert!(!name_field.has_arguments());

        Ok(())
    }

    #[test]
    fn fields_keep_declaration_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { zebra: Int apple: Int mango: Int }")?
            .build()?;

        let query = schema.type_node("Query").expect("Query is defined");
        assert_eq!(
            query.field_names().collect::<Vec<_>>(),
            vec!["zebra", "apple", "mango"],
        );

        Ok(())
    }

    #[test]
    fn blank_descriptions_are_treated_as_missing() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "\"   \"\ntype Query { \"\" id: ID }")?
            .build()?;

        let query = schema.type_node("Query").expect("Query is defined");
        assert!(!query.has_description());
        assert_eq!(query.field("id").and_then(|f| f.description()), None);

        Ok(())
    }

    #[test]
    fn field_arguments_and_default_values() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "enum Order { ASC DESC }\n",
                "input Filter { tags: [String!] }\n",
                "type Query {\n",
                "  users(\n",
                "    first: Int = 10,\n",
                "    order: Order = ASC,\n",
                "    filter: Filter = {tags: [\"a\", \"b\"]},\n",
                "    ratio: Float = 2.0,\n",
                "  ): [String]\n",
                "}\n",
            ))?
            .build()?;

        let users = schema.type_node("Query")
            .and_then(|q| q.field("users"))
            .expect("Query.users is defined");
        let defaults: Vec<(&str, Option<&str>)> = users.arguments().iter()
            .map(|arg| (arg.name(), arg.default_value()))
            .collect();
        assert_eq!(defaults, vec![
            ("first", Some("10")),
            ("order", Some("ASC")),
            ("filter", Some("{tags: [\"a\", \"b\"]}")),
            ("ratio", Some("2.0")),
        ]);

        Ok(())
    }

    #[test]
    fn load_invalid_schema_syntax() {
        let result = SchemaBuilder::new()
            .load_str(None, "this is not valid syntax");

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file, .. })
                if file == PathBuf::from("str://0"),
        ));
    }
}

mod deprecation {
    use super::*;

    #[test]
    fn deprecated_directive_sets_reason() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "enum Color { RED @deprecated(reason: \"use CRIMSON\") CRIMSON }\n",
                "type Query {\n",
                "  old: Int @deprecated\n",
                "  legacy(flag: Boolean @deprecated(reason: \"gone\")): Int\n",
                "  current: Int\n",
                "}\n",
            ))?
            .build()?;

        let query = schema.type_node("Query").expect("Query is defined");
        assert_eq!(
            query.field("old").map(|f| f.deprecation_state().clone()),
            Some(DeprecationState::Deprecated("No longer supported".to_string())),
        );
        assert!(!query.field("current").expect("field exists").is_deprecated());

        let flag = query.field("legacy")
            .and_then(|f| f.argument("flag"))
            .expect("argument exists");
        assert_eq!(flag.deprecation_state().reason(), Some("gone"));

        let color = schema.type_node("Color").expect("enum exists");
        assert_eq!(color.enum_values()[0].deprecation_state().reason(), Some("use CRIMSON"));
        assert!(!color.enum_values()[1].is_deprecated());

        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extensions_merge_into_base_definitions() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "extend type Query { posts: [Post] }\n",
                "extend enum Status { ARCHIVED }\n",
                "extend union Result = Post\n",
                "extend input PostInput { body: String }\n",
                "extend type Post implements Node { title: String }\n",
            ))?
            .load_str(None, concat!(
                "interface Node { id: ID! }\n",
                "type Query { post: Post }\n",
                "type Post { id: ID! }\n",
                "type Comment { id: ID! }\n",
                "union Result = Comment\n",
                "enum Status { ACTIVE }\n",
                "input PostInput { title: String }\n",
            ))?
            .build()?;

        let query = schema.type_node("Query").expect("Query is defined");
        assert_eq!(query.field_names().collect::<Vec<_>>(), vec!["post", "posts"]);

        let status = schema.type_node("Status").expect("Status is defined");
        assert_eq!(
            status.enum_values().iter().map(|v| v.name()).collect::<Vec<_>>(),
            vec!["ACTIVE", "ARCHIVED"],
        );

        let result = schema.type_node("Result").expect("Result is defined");
        assert_eq!(
            result.union_member_names(),
            &["Comment".to_string(), "Post".to_string()],
        );

        let input = schema.type_node("PostInput").expect("PostInput is defined");
        assert_eq!(input.field_names().collect::<Vec<_>>(), vec!["title", "body"]);

        let post = schema.type_node("Post").expect("Post is defined");
        assert!(post.implements("Node"));

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "extend type Missing { id: ID }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_with_wrong_kind() {
        let result = SchemaBuilder::new()
            .load_str(None, "enum Status { A }\nextend type Status { id: ID }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionKind {
                extension_kind: TypeKind::Object,
                type_kind: TypeKind::Enum,
                ..
            }),
        ));
    }

    #[test]
    fn extension_duplicating_a_field() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { id: ID }\nextend type Query { id: ID }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "id",
        ));
    }
}

mod invalid_definitions {
    use super::*;

    #[test]
    fn duplicate_type_definition_across_loads() {
        let result = SchemaBuilder::new()
            .load_str(None, "type User { id: ID }")
            .and_then(|builder| builder.load_str(None, "type User { name: String }"));

        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition {
                def1: FileLocation {
                    file: PathBuf::from("str://0"),
                    line: 1,
                    column: 1,
                },
                def2: FileLocation {
                    file: PathBuf::from("str://1"),
                    line: 1,
                    column: 1,
                },
                type_name: "User".to_string(),
            },
        );
    }

    #[test]
    fn redefinition_of_builtin_scalar() {
        let result = SchemaBuilder::new()
            .load_str(None, "scalar String");

        assert!(matches!(
            result,
            Err(SchemaBuildError::RedefinitionOfBuiltinType { type_name, .. })
                if type_name == "String",
        ));
    }

    #[test]
    fn dunder_prefixed_type_name() {
        let result = SchemaBuilder::new()
            .load_str(None, "type __Secret { id: ID }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. }),
        ));
    }

    #[test]
    fn duplicate_enum_value() {
        let result = SchemaBuilder::new()
            .load_str(None, "enum Status { A B A }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEnumValueDefinition { value_name, .. })
                if value_name == "A",
        ));
    }
}

mod root_operations {
    use super::*;

    #[test]
    fn default_root_operation_type_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { id: ID }\n",
                "type Mutation { id: ID }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), None);

        Ok(())
    }

    #[test]
    fn schema_block_overrides_root_operation_type_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery, subscription: Events }\n",
                "type RootQuery { id: ID }\n",
                "type Events { id: ID }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type_name(), "RootQuery");
        assert_eq!(schema.subscription_type_name(), Some("Events"));

        Ok(())
    }

    #[test]
    fn schema_block_naming_undefined_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Nope }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::UndefinedRootOperationType {
                operation: RootOperation::Query,
                ..
            }),
        ));
    }

    #[test]
    fn duplicate_schema_block_operation() {
        let result = SchemaBuilder::new()
            .load_str(None, "type A { id: ID }\nschema { query: A }")
            .and_then(|builder| builder.load_str(None, "schema { query: A }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: RootOperation::Query,
                ..
            }),
        ));
    }
}

mod files {
    use super::*;

    #[test]
    fn load_schema_from_files() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir is created");
        let query_path = dir.path().join("query.graphql");
        let user_path = dir.path().join("user.graphql");
        std::fs::File::create(&query_path)
            .and_then(|mut f| f.write_all(b"type Query { me: User }"))
            .expect("query file is written");
        std::fs::File::create(&user_path)
            .and_then(|mut f| f.write_all(b"type User { id: ID! }"))
            .expect("user file is written");

        let schema = SchemaBuilder::new()
            .load_files(vec![&query_path, &user_path])?
            .build()?;

        assert!(schema.contains_type("Query"));
        assert!(schema.contains_type("User"));

        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let path = PathBuf::from("/definitely/not/here/schema.graphql");
        let result = SchemaBuilder::new().load_file(&path);

        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::SchemaFileReadError(Box::new(
                ReadContentError::FileDoesNotExist(path),
            )),
        );
    }
}

mod lookups {
    use super::*;

    #[test]
    fn require_type_suggests_close_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { user: User }\ntype User { id: ID }")?
            .build()?;

        assert!(schema.require_type("User", "type").is_ok());
        assert_eq!(
            schema.require_type("Usr", "type").unwrap_err(),
            QueryError::UnknownType {
                context: "type".to_string(),
                name: "Usr".to_string(),
                suggestion: Some("User".to_string()),
            },
        );

        Ok(())
    }

    #[test]
    fn require_type_of_kind() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "interface Node { id: ID! }\n",
                "type User implements Node { id: ID! }\n",
            ))?
            .build()?;

        assert!(schema.require_type_of_kind("Node", TypeKind::Interface).is_ok());
        assert_eq!(
            schema.require_type_of_kind("User", TypeKind::Interface).unwrap_err(),
            QueryError::KindMismatch {
                name: "User".to_string(),
                expected: TypeKind::Interface,
                actual: TypeKind::Object,
            },
        );
        assert_eq!(
            schema.require_type_of_kind("Nod", TypeKind::Interface).unwrap_err(),
            QueryError::UnknownType {
                context: "interface".to_string(),
                name: "Nod".to_string(),
                suggestion: Some("Node".to_string()),
            },
        );

        Ok(())
    }

    #[test]
    fn types_sorted_by_name() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Zeta { id: ID }\ntype Alpha { id: ID }")?
            .build()?;

        let names: Vec<&str> = schema.types_sorted_by_name().into_iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(names, vec!["Alpha", "Boolean", "Float", "ID", "Int", "String", "Zeta"]);

        Ok(())
    }
}
