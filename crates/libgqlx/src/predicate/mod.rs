//! Composable filters over schema definitions.
//!
//! Every predicate starts out with all of its dimensions inactive and
//! therefore matches everything. Each `with_*` call activates one dimension;
//! active dimensions are combined with AND.

mod argument_predicate;
mod enum_value_predicate;
mod field_predicate;
mod name_matcher;
mod nullability;
mod type_predicate;

pub use argument_predicate::ArgumentPredicate;
pub use enum_value_predicate::EnumValuePredicate;
pub use field_predicate::FieldPredicate;
pub use name_matcher::NameMatcher;
pub use nullability::Nullability;
pub use type_predicate::TypePredicate;
