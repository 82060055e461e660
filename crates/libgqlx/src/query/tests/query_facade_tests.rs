use crate::QueryError;
use crate::QueryFacade;
use crate::Schema;
use crate::SchemaBuilder;
use crate::query::ArgsQuery;
use crate::query::FieldsQuery;
use crate::query::PathsQuery;
use crate::query::ReferenceKind;
use crate::query::ReferencesQuery;
use crate::query::TypesQuery;
use crate::query::ValuesQuery;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, QueryError>;

const BLOG_SDL: &str = r#"
"The root query"
type Query {
  "Look up a user"
  user(id: ID!): User
  users(first: Int = 10, role: Role): [User!]!
  viewer: Viewer
  search(term: String!, filter: SearchFilter): [SearchResult]
}

type Mutation {
  createPost(input: PostInput!, authorId: ID!): Post
}

type Viewer {
  me: User
  feed: [Post]
}

interface Node {
  id: ID!
}

"Someone with an account"
type User implements Node {
  id: ID!
  name: String!
  role: Role
  posts(first: Int): [Post!]!
  legacyName: String @deprecated(reason: "use name")
}

type Post implements Node {
  id: ID!
  title: String
  author: User!
}

type Comment {
  id: ID!
}

union SearchResult = User | Post

enum Role {
  "Can do everything"
  ADMIN
  MEMBER
  GUEST @deprecated
}

input PostInput {
  title: String!
  body: String = "empty"
}

input SearchFilter {
  role: Role
}
"#;

fn schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, BLOG_SDL)
        .and_then(|builder| builder.build())
        .expect("blog schema builds")
}

fn type_names(facade: &QueryFacade<'_>, query: &TypesQuery) -> Result<Vec<String>> {
    Ok(facade.types(query)?.into_iter().map(|info| info.name).collect())
}

mod types {
    use super::*;

    #[test]
    fn unfiltered_types_are_sorted_by_name() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        assert_eq!(type_names(&facade, &TypesQuery::default())?, vec![
            "Boolean", "Comment", "Float", "ID", "Int", "Mutation", "Node",
            "Post", "PostInput", "Query", "Role", "SearchFilter",
            "SearchResult", "String", "User", "Viewer",
        ]);
        Ok(())
    }

    #[test]
    fn used_by_a_single_type() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type User { id: ID!, name: String!, posts: [Post!]! }\n",
                "type Post { id: ID! }\n",
                "type Comment { id: ID! }\n",
            ))
            .and_then(|builder| builder.build())
            .expect("schema builds");
        let facade = QueryFacade::new(&schema);

        let names = type_names(&facade, &TypesQuery {
            used_by: vec!["User".to_string()],
            ..Default::default()
        })?;

        assert!(names.contains(&"Post".to_string()));
        assert!(names.contains(&"ID".to_string()));
        assert!(names.contains(&"String".to_string()));
        assert!(!names.contains(&"Comment".to_string()));
        Ok(())
    }

    #[test]
    fn kinds_and_implements() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let inputs_and_enums = type_names(&facade, &TypesQuery {
            kinds: vec![TypeKind::InputObject, TypeKind::Enum],
            ..Default::default()
        })?;
        assert_eq!(inputs_and_enums, vec!["PostInput", "Role", "SearchFilter"]);

        let nodes = type_names(&facade, &TypesQuery {
            implements: Some("Node".to_string()),
            ..Default::default()
        })?;
        assert_eq!(nodes, vec!["Post", "User"]);
        Ok(())
    }

    #[test]
    fn combined_dimensions() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let names = type_names(&facade, &TypesQuery {
            has_fields: vec!["id".to_string()],
            not_used_by: vec!["Query".to_string()],
            kinds: vec![TypeKind::Object],
            ..Default::default()
        })?;
        assert_eq!(names, vec!["Comment", "Post"]);

        let described = type_names(&facade, &TypesQuery {
            has_description: true,
            name_glob: Some("*r*".to_string()),
            ..Default::default()
        })?;
        assert_eq!(described, vec!["Query", "User"]);
        Ok(())
    }

    #[test]
    fn implements_requires_an_existing_interface() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let mismatch = facade.types(&TypesQuery {
            implements: Some("User".to_string()),
            ..Default::default()
        });
        assert_eq!(mismatch.unwrap_err().to_string(), "'User' is not an interface (it's a type)");

        let missing = facade.types(&TypesQuery {
            implements: Some("Nod".to_string()),
            ..Default::default()
        });
        assert_eq!(
            missing.unwrap_err().to_string(),
            "interface 'Nod' does not exist in schema, did you mean 'Node'?",
        );
    }

    #[test]
    fn unknown_usage_reference_fails() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let result = facade.types(&TypesQuery {
            used_by_any: vec!["Viewer".to_string(), "Veiwer".to_string()],
            ..Default::default()
        });

        assert_eq!(
            result.unwrap_err().to_string(),
            "type 'Veiwer' does not exist in schema, did you mean 'Viewer'?",
        );
    }

    #[test]
    fn configuration_is_checked_before_existence() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let result = facade.types(&TypesQuery {
            implements: Some("Missing".to_string()),
            name_regex: Some("(".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(QueryError::Configuration(_))));
    }
}

mod fields {
    use super::*;

    #[test]
    fn fields_of_one_type_keep_declaration_order() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let fields = facade.fields(&FieldsQuery {
            type_name: Some("User".to_string()),
            ..Default::default()
        })?;

        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "role", "posts", "legacyName"]);
        assert!(fields.iter().all(|f| f.type_name.is_none()));
        assert_eq!(fields[3].type_annotation, "[Post!]!");
        assert_eq!(fields[3].arguments[0].name, "first");
        assert_eq!(fields[3].arguments[0].type_annotation, "Int");
        Ok(())
    }

    #[test]
    fn fields_across_types_are_ordered_by_type_then_declaration() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let fields = facade.fields(&FieldsQuery {
            returns: Some("User".to_string()),
            ..Default::default()
        })?;

        let locations: Vec<String> = fields.iter()
            .map(|f| format!("{}.{}", f.type_name.as_deref().unwrap_or_default(), f.name))
            .collect();
        assert_eq!(locations, vec![
            "Post.author",
            "Query.user",
            "Query.users",
            "Viewer.me",
        ]);
        Ok(())
    }

    #[test]
    fn input_object_fields_are_listed_with_defaults() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let fields = facade.fields(&FieldsQuery {
            type_name: Some("PostInput".to_string()),
            nullable: true,
            ..Default::default()
        })?;

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "body");
        assert_eq!(fields[0].default_value.as_deref(), Some("\"empty\""));
        Ok(())
    }

    #[test]
    fn deprecated_and_has_arg() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let deprecated = facade.fields(&FieldsQuery {
            deprecated: true,
            ..Default::default()
        })?;
        assert_eq!(deprecated.len(), 1);
        assert_eq!(deprecated[0].name, "legacyName");

        let with_first = facade.fields(&FieldsQuery {
            has_args: vec!["first".to_string()],
            ..Default::default()
        })?;
        let names: Vec<&str> = with_first.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["users", "posts"]);
        Ok(())
    }

    #[test]
    fn required_and_nullable_together_is_rejected() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let result = facade.fields(&FieldsQuery {
            type_name: Some("DoesNotExist".to_string()),
            required: true,
            nullable: true,
            ..Default::default()
        });

        assert_eq!(
            result.unwrap_err(),
            QueryError::Configuration(
                "--required and --nullable cannot be used together".to_string(),
            ),
        );
    }

    #[test]
    fn unknown_type_suggests_a_name() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let result = facade.fields(&FieldsQuery {
            type_name: Some("Usr".to_string()),
            ..Default::default()
        });

        assert_eq!(
            result.unwrap_err().to_string(),
            "type 'Usr' does not exist in schema, did you mean 'User'?",
        );
    }
}

mod args {
    use super::*;

    #[test]
    fn args_of_one_field() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let args = facade.args(&ArgsQuery {
            field: Some("Query.users".to_string()),
            ..Default::default()
        })?;

        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "first");
        assert_eq!(args[0].default_value.as_deref(), Some("10"));
        assert_eq!(args[0].type_name, None);
        assert_eq!(args[1].name, "role");
        Ok(())
    }

    #[test]
    fn args_across_fields_are_ordered() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let args = facade.args(&ArgsQuery {
            required: true,
            ..Default::default()
        })?;

        let locations: Vec<String> = args.iter()
            .map(|arg| format!(
                "{}.{}.{}",
                arg.type_name.as_deref().unwrap_or_default(),
                arg.field_name.as_deref().unwrap_or_default(),
                arg.name,
            ))
            .collect();
        assert_eq!(locations, vec![
            "Mutation.createPost.input",
            "Mutation.createPost.authorId",
            "Query.user.id",
            "Query.search.term",
        ]);
        Ok(())
    }

    #[test]
    fn args_by_type() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let args = facade.args(&ArgsQuery {
            type_name: Some("Int".to_string()),
            ..Default::default()
        })?;

        let names: Vec<(&str, &str)> = args.iter()
            .map(|arg| (arg.field_name.as_deref().unwrap_or_default(), arg.name.as_str()))
            .collect();
        assert_eq!(names, vec![("users", "first"), ("posts", "first")]);
        Ok(())
    }

    #[test]
    fn malformed_field_spec() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        for spec in ["Query", "Query.user.id", ".user", "Query."] {
            let result = facade.args(&ArgsQuery {
                field: Some(spec.to_string()),
                ..Default::default()
            });
            assert!(
                matches!(result, Err(QueryError::Configuration(_))),
                "expected `{spec}` to be rejected",
            );
        }
    }

    #[test]
    fn unknown_field_suggests_a_name() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let result = facade.args(&ArgsQuery {
            field: Some("Query.usr".to_string()),
            ..Default::default()
        });

        assert_eq!(
            result.unwrap_err(),
            QueryError::UnknownField {
                type_name: "Query".to_string(),
                field_name: "usr".to_string(),
                suggestion: Some("user".to_string()),
            },
        );
    }
}

mod paths {
    use super::*;

    fn rendered(facade: &QueryFacade<'_>, query: &PathsQuery) -> Result<Vec<String>> {
        Ok(facade.paths(query)?.into_iter().map(|info| info.path).collect())
    }

    #[test]
    fn paths_start_at_the_query_root_by_default() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { user(id: ID!): User, viewer: Viewer }\n",
                "type Viewer { me: User }\n",
                "type User { id: ID! }\n",
            ))
            .and_then(|builder| builder.build())
            .expect("schema builds");
        let facade = QueryFacade::new(&schema);

        assert_eq!(rendered(&facade, &PathsQuery::new("User"))?, vec![
            "Query.user(...) -> User",
            "Query.viewer -> Viewer.me -> User",
        ]);
        Ok(())
    }

    #[test]
    fn custom_start_through_and_shortest() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let from_mutation = rendered(&facade, &PathsQuery {
            from: Some("Mutation".to_string()),
            max_depth: 2,
            ..PathsQuery::new("User")
        })?;
        assert_eq!(from_mutation, vec!["Mutation.createPost(...) -> Post.author -> User"]);

        let through_viewer = rendered(&facade, &PathsQuery {
            through: Some("Viewer".to_string()),
            max_depth: 3,
            ..PathsQuery::new("User")
        })?;
        assert_eq!(through_viewer, vec![
            "Query.viewer -> Viewer.feed -> Post.author -> User",
            "Query.viewer -> Viewer.me -> User",
        ]);

        let shortest = rendered(&facade, &PathsQuery {
            shortest: true,
            ..PathsQuery::new("User")
        })?;
        assert_eq!(shortest, vec!["Query.user(...) -> User", "Query.users(...) -> User"]);
        Ok(())
    }

    #[test]
    fn unknown_through_type_fails() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let result = facade.paths(&PathsQuery {
            through: Some("Veiwer".to_string()),
            ..PathsQuery::new("User")
        });

        assert!(matches!(
            result,
            Err(QueryError::UnknownType { name, .. }) if name == "Veiwer",
        ));
    }

    #[test]
    fn missing_query_root_is_reported() {
        let schema = SchemaBuilder::new()
            .load_str(None, "type User { id: ID! }")
            .and_then(|builder| builder.build())
            .expect("schema builds");
        let facade = QueryFacade::new(&schema);

        let result = facade.paths(&PathsQuery::new("User"));

        assert!(matches!(
            result,
            Err(QueryError::UnknownType { name, .. }) if name == "Query",
        ));
    }
}

mod references {
    use super::*;

    #[test]
    fn fields_and_arguments_referencing_a_type() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let refs = facade.references(&ReferencesQuery::new("Role"))?;

        let summary: Vec<(&str, ReferenceKind, &str)> = refs.iter()
            .map(|r| (r.location.as_str(), r.kind, r.type_annotation.as_str()))
            .collect();
        assert_eq!(summary, vec![
            ("Query.users.role", ReferenceKind::Argument, "Role"),
            ("SearchFilter.role", ReferenceKind::Field, "Role"),
            ("User.role", ReferenceKind::Field, "Role"),
        ]);
        Ok(())
    }

    #[test]
    fn field_reference_precedes_its_argument_references() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { node(parent: Node): Node }\ntype Node { id: ID }")
            .and_then(|builder| builder.build())
            .expect("schema builds");
        let facade = QueryFacade::new(&schema);

        let refs = facade.references(&ReferencesQuery::new("Node"))?;

        let locations: Vec<&str> = refs.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Query.node", "Query.node.parent"]);
        Ok(())
    }

    #[test]
    fn kind_and_in_filters() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let fields_only = facade.references(&ReferencesQuery {
            kind: Some(ReferenceKind::Field),
            ..ReferencesQuery::new("Role")
        })?;
        assert_eq!(fields_only.len(), 2);

        let in_query = facade.references(&ReferencesQuery {
            in_type: Some("Query".to_string()),
            ..ReferencesQuery::new("ID")
        })?;
        let locations: Vec<&str> = in_query.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Query.user.id"]);
        Ok(())
    }

    #[test]
    fn reference_kind_parsing() {
        assert_eq!("field".parse::<ReferenceKind>(), Ok(ReferenceKind::Field));
        assert_eq!("argument".parse::<ReferenceKind>(), Ok(ReferenceKind::Argument));
        assert_eq!(
            "type".parse::<ReferenceKind>(),
            Err(QueryError::Configuration(
                "--kind must be 'field' or 'argument', got 'type'".to_string(),
            )),
        );
    }
}

mod values {
    use super::*;

    #[test]
    fn values_of_one_enum() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let values = facade.values(&ValuesQuery {
            enum_name: Some("Role".to_string()),
            ..Default::default()
        })?;

        let names: Vec<&str> = values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["ADMIN", "MEMBER", "GUEST"]);
        assert!(values.iter().all(|v| v.enum_name.is_none()));
        assert_eq!(values[0].description.as_deref(), Some("Can do everything"));
        Ok(())
    }

    #[test]
    fn values_of_all_enums_with_filters() -> Result<()> {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let deprecated = facade.values(&ValuesQuery {
            deprecated: true,
            ..Default::default()
        })?;

        assert_eq!(deprecated.len(), 1);
        assert_eq!(deprecated[0].enum_name.as_deref(), Some("Role"));
        assert_eq!(deprecated[0].name, "GUEST");
        Ok(())
    }

    #[test]
    fn values_of_a_non_enum() {
        let schema = schema();
        let facade = QueryFacade::new(&schema);

        let result = facade.values(&ValuesQuery {
            enum_name: Some("User".to_string()),
            ..Default::default()
        });
        assert_eq!(result.unwrap_err().to_string(), "'User' is not an enum (it's a type)");

        let unknown = facade.values(&ValuesQuery {
            enum_name: Some("Rol".to_string()),
            ..Default::default()
        });
        assert_eq!(
            unknown.unwrap_err().to_string(),
            "enum 'Rol' does not exist in schema, did you mean 'Role'?",
        );
    }
}

#[test]
fn repeated_queries_yield_identical_results() -> Result<()> {
    let schema = schema();
    let facade = QueryFacade::new(&schema);
    let types_query = TypesQuery {
        used_by_any: vec!["Query".to_string(), "User".to_string()],
        ..Default::default()
    };
    let paths_query = PathsQuery::new("Post");

    assert_eq!(facade.types(&types_query)?, facade.types(&types_query)?);
    assert_eq!(facade.paths(&paths_query)?, facade.paths(&paths_query)?);
    assert_eq!(
        facade.fields(&FieldsQuery::default())?,
        facade.fields(&FieldsQuery::default())?,
    );
    Ok(())
}
