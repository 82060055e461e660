pub mod ast;
mod file_reader;
pub mod paths;
pub mod predicate;
pub mod query;
pub mod schema;
mod suggest;
pub mod types;
pub mod usage;

pub use file_reader::ReadContentError;
pub use query::QueryError;
pub use query::QueryFacade;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;
