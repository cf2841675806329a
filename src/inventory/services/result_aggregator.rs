use crate::inventory::domain::EnvironmentMap;

/// ResultAggregator - merges per-root scans of one manager
///
/// Records are only ever appended: for every (environment, bucket) the merged
/// list is the concatenation of the input lists in input order.
pub struct ResultAggregator;

impl ResultAggregator {
    pub fn merge<I>(inputs: I) -> EnvironmentMap
    where
        I: IntoIterator<Item = EnvironmentMap>,
    {
        let mut merged = EnvironmentMap::new();
        for input in inputs {
            for (environment, inventory) in input {
                merged.entry(environment).or_default().append(inventory);
            }
        }
        merged
    }
}
