use crate::model::drill::Drill;
use crate::model::observation::PlayerKey;
use crate::model::record::RecordMap;

/// Inclusive share of the cohort performing at-or-worse than `v`: best
/// is 100, worst is 100/n, ties share.
pub fn percentile_rank(drill: Drill, values: &[f64], v: f64) -> f64 {
    debug_assert!(!values.is_empty());
    let worse_or_equal = values
        .iter()
        .filter(|&&other| drill.worse_or_equal(other, v))
        .count();
    100.0 * worse_or_equal as f64 / values.len() as f64
}

pub fn annotate_cohort(records: &mut RecordMap, drill: Drill, members: &[PlayerKey]) {
    let mut valued: Vec<(PlayerKey, f64)> = Vec::with_capacity(members.len());
    for key in members {
        if let Some(&v) = records.get(key).and_then(|r| r.values.get(&drill)) {
            valued.push((key.clone(), v));
        }
    }
    let values: Vec<f64> = valued.iter().map(|(_, v)| *v).collect();
    for (key, v) in valued {
        let p = percentile_rank(drill, &values, v);
        if let Some(record) = records.get_mut(&key) {
            record.percentiles.insert(drill, p);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/percentiles.rs"]
mod tests;
