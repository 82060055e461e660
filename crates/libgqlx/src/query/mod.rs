mod options;
mod query_error;
mod query_facade;
mod records;

pub use options::ArgsQuery;
pub use options::FieldsQuery;
pub use options::PathsQuery;
pub use options::ReferencesQuery;
pub use options::TypesQuery;
pub use options::ValuesQuery;
pub use query_error::QueryError;
pub use query_facade::QueryFacade;
pub use records::ArgInfo;
pub use records::ArgumentSummary;
pub use records::FieldInfo;
pub use records::PathInfo;
pub use records::ReferenceInfo;
pub use records::ReferenceKind;
pub use records::TypeInfo;
pub use records::ValueInfo;

#[cfg(test)]
mod tests;
