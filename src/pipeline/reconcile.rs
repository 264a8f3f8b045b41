use std::collections::BTreeSet;

use crate::model::drill::Drill;
use crate::model::observation::RawObservation;
use crate::model::record::RecordMap;
use crate::pipeline::cohorts::cohorts_for_drill;
use crate::pipeline::merge::merge_observations;
use crate::pipeline::percentiles::annotate_cohort;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub applied: usize,
    pub superseded: usize,
    pub new_records: usize,
    pub records_total: usize,
    pub cohorts_recomputed: usize,
}

/// Merge `observations` into `records`, then redo percentiles for the
/// cohorts the merge touched.
pub fn reconcile(records: &mut RecordMap, observations: &[RawObservation]) -> RunStats {
    let outcome = merge_observations(records, observations);
    let drills: BTreeSet<Drill> = outcome.touched.iter().map(|&(drill, _)| drill).collect();
    for drill in drills {
        for (year, members) in cohorts_for_drill(records, drill) {
            if outcome.touched.contains(&(drill, year)) {
                annotate_cohort(records, drill, &members);
            }
        }
    }
    RunStats {
        applied: outcome.applied,
        superseded: outcome.superseded,
        new_records: outcome.new_records,
        records_total: records.len(),
        cohorts_recomputed: outcome.touched.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/reconcile.rs"]
mod tests;
