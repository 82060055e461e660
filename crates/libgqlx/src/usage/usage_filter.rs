use crate::QueryError;
use crate::usage::UsageIndex;
use crate::usage::UsageSet;

/// How a candidate type must relate to the usage sets of a list of
/// reference types.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UsageRelation {
    /// In the usage set of every reference type.
    UsedByAll,

    /// In the usage set of at least one reference type.
    UsedByAny,

    /// In the usage set of no reference type.
    NotUsedByAny,

    /// Absent from the usage set of at least one reference type.
    NotUsedByAll,
}

/// A usage relation bound to the precomputed usage sets of its reference
/// types.
#[derive(Clone, Debug)]
pub struct UsageFilter<'schema> {
    relation: UsageRelation,
    usage_sets: Vec<UsageSet<'schema>>,
}
impl<'schema> UsageFilter<'schema> {
    /// Resolves every reference type up front so an unknown name fails the
    /// whole query before any candidate is examined. An empty
    /// `reference_type_names` list yields `None` (the dimension is inactive).
    pub fn build(
        index: &UsageIndex<'schema>,
        relation: UsageRelation,
        reference_type_names: &[String],
    ) -> Result<Option<Self>, QueryError> {
        if reference_type_names.is_empty() {
            return Ok(None);
        }

        let usage_sets = reference_type_names.iter()
            .map(|name| index.usage_set(name.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            relation,
            usage_sets,
        }))
    }

    pub fn matches(&self, type_name: &str) -> bool {
        let mut sets = self.usage_sets.iter();
        match self.relation {
            UsageRelation::UsedByAll => sets.all(|set| set.contains(type_name)),
            UsageRelation::UsedByAny => sets.any(|set| set.contains(type_name)),
            UsageRelation::NotUsedByAny => !sets.any(|set| set.contains(type_name)),
            UsageRelation::NotUsedByAll => !sets.all(|set| set.contains(type_name)),
        }
    }

    pub fn relation(&self) -> UsageRelation {
        self.relation
    }
}
