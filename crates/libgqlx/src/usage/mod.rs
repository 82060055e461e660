mod usage_filter;
mod usage_index;

pub use usage_filter::UsageFilter;
pub use usage_filter::UsageRelation;
pub use usage_index::UsageIndex;
pub use usage_index::UsageSet;
