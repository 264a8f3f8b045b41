use std::collections::BTreeMap;

use crate::model::drill::Drill;
use crate::model::observation::PlayerKey;
use crate::model::record::RecordMap;

/// Records holding a value for `drill`, grouped by graduation year.
/// Singleton cohorts are returned too; their sole member scores 100.
pub fn cohorts_for_drill(records: &RecordMap, drill: Drill) -> BTreeMap<u16, Vec<PlayerKey>> {
    let mut cohorts: BTreeMap<u16, Vec<PlayerKey>> = BTreeMap::new();
    for (key, record) in records {
        if record.values.contains_key(&drill) {
            cohorts
                .entry(key.graduation_year)
                .or_default()
                .push(key.clone());
        }
    }
    cohorts
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/cohorts.rs"]
mod tests;
