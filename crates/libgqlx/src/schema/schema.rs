use crate::QueryError;
use crate::schema::SchemaBuilder;
use crate::suggest;
use crate::types::TypeKind;
use crate::types::TypeNode;
use indexmap::IndexMap;

/// Represents a fully loaded and immutable GraphQL schema.
///
/// Every lookup is presence-checked: [`Schema::type_node()`] returns an
/// [`Option`] and [`Schema::require_type()`] turns absence into a
/// [`QueryError::UnknownType`] carrying a "did you mean" suggestion.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: String,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: IndexMap<String, TypeNode>,
}
impl Schema {
    /// Returns an [`IndexMap<String, TypeNode>`] containing all types defined
    /// within this [`Schema`], in load order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as the built-in scalars (`String`, `Int`, `Float`,
    /// `Boolean` and `ID`).
    pub fn all_types(&self) -> &IndexMap<String, TypeNode> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn contains_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Name of the Mutation root operation type, if the schema has one.
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// Name of the Query root operation type. This is `Query` unless a
    /// `schema { query: ... }` block overrides it, and is reported even when
    /// no such type was defined.
    pub fn query_type_name(&self) -> &str {
        self.query_type_name.as_str()
    }

    /// Looks up the type named `name`, failing with
    /// [`QueryError::UnknownType`] when it is absent. `context` names the role
    /// the type plays in the caller's query ("type", "interface", ...) and is
    /// used only in the error message.
    pub fn require_type(
        &self,
        name: &str,
        context: &str,
    ) -> Result<&TypeNode, QueryError> {
        self.type_node(name).ok_or_else(|| QueryError::UnknownType {
            context: context.to_string(),
            name: name.to_string(),
            suggestion: suggest::find_closest(
                name,
                self.types.keys().map(String::as_str),
            ),
        })
    }

    /// Like [`Schema::require_type()`], but also requires the type to be of
    /// the given `kind`. Suggestions are drawn only from types of that kind.
    pub fn require_type_of_kind(
        &self,
        name: &str,
        kind: TypeKind,
    ) -> Result<&TypeNode, QueryError> {
        let Some(type_node) = self.type_node(name) else {
            return Err(QueryError::UnknownType {
                context: kind.to_string(),
                name: name.to_string(),
                suggestion: suggest::find_closest(
                    name,
                    self.types.values()
                        .filter(|type_node| type_node.kind() == kind)
                        .map(TypeNode::name),
                ),
            });
        };

        if type_node.kind() != kind {
            return Err(QueryError::KindMismatch {
                name: name.to_string(),
                expected: kind,
                actual: type_node.kind(),
            });
        }

        Ok(type_node)
    }

    /// Name of the Subscription root operation type, if the schema has one.
    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }

    pub fn type_node(&self, name: &str) -> Option<&TypeNode> {
        self.types.get(name)
    }

    /// All types ordered by name. The load order of [`Schema::all_types()`]
    /// is an artifact of how the schema files were arranged, so anything
    /// user-visible should go through this instead.
    pub fn types_sorted_by_name(&self) -> Vec<&TypeNode> {
        let mut types: Vec<&TypeNode> = self.types.values().collect();
        types.sort_by(|a, b| a.name().cmp(b.name()));
        types
    }
}
