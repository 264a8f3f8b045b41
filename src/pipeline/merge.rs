use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::model::observation::RawObservation;
use crate::model::record::{CohortId, PlayerYearRecord, Provenance, RecordMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub applied: usize,
    pub superseded: usize,
    pub new_records: usize,
    /// Cohorts whose value set changed; their percentiles are now stale.
    pub touched: BTreeSet<CohortId>,
}

/// Last write wins per (player, year, drill) cell, keyed on `observed_at`;
/// missing or tied markers keep the first-seen value.
pub fn merge_observations(
    records: &mut RecordMap,
    observations: &[RawObservation],
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    for obs in observations {
        let key = obs.key();
        let record = records.entry(key.clone()).or_insert_with(|| {
            outcome.new_records += 1;
            PlayerYearRecord::new(&obs.player_name, key.clone())
        });
        match apply_observation(record, obs) {
            CellChange::ValueSet => {
                outcome.applied += 1;
                outcome.touched.insert((obs.drill, key.graduation_year));
            }
            CellChange::ProvenanceOnly => outcome.applied += 1,
            CellChange::Discarded => outcome.superseded += 1,
        }
    }
    outcome
}

enum CellChange {
    ValueSet,
    ProvenanceOnly,
    Discarded,
}

fn apply_observation(record: &mut PlayerYearRecord, obs: &RawObservation) -> CellChange {
    let Some(&stored) = record.values.get(&obs.drill) else {
        record.values.insert(obs.drill, obs.value);
        record.provenance.insert(obs.drill, Provenance::of(obs));
        return CellChange::ValueSet;
    };

    let ord = {
        let stored_at = record
            .provenance
            .get(&obs.drill)
            .and_then(|p| p.observed_at.as_deref());
        obs.observed_at.as_deref().cmp(&stored_at)
    };

    match ord {
        Ordering::Greater => {
            if (obs.value - stored).abs() <= obs.drill.epsilon() {
                // Same measurement re-scraped later.
                record.provenance.insert(obs.drill, Provenance::of(obs));
                CellChange::ProvenanceOnly
            } else {
                record.values.insert(obs.drill, obs.value);
                record.provenance.insert(obs.drill, Provenance::of(obs));
                CellChange::ValueSet
            }
        }
        Ordering::Less | Ordering::Equal => CellChange::Discarded,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/merge.rs"]
mod tests;
