use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::drill::Drill;
use crate::model::observation::{PlayerKey, RawObservation};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub observed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_record_id: Option<String>,
}

impl Provenance {
    pub fn of(obs: &RawObservation) -> Self {
        Self {
            observed_at: obs.observed_at.clone(),
            source_record_id: obs.source_record_id.clone(),
        }
    }
}

/// One per distinct PlayerKey; at most one value per drill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerYearRecord {
    pub display_name: String,
    pub key: PlayerKey,
    #[serde(default)]
    pub values: BTreeMap<Drill, f64>,
    #[serde(default)]
    pub provenance: BTreeMap<Drill, Provenance>,
    #[serde(default)]
    pub percentiles: BTreeMap<Drill, f64>,
}

impl PlayerYearRecord {
    pub fn new(display_name: &str, key: PlayerKey) -> Self {
        Self {
            display_name: display_name.to_string(),
            key,
            values: BTreeMap::new(),
            provenance: BTreeMap::new(),
            percentiles: BTreeMap::new(),
        }
    }
}

pub type RecordMap = BTreeMap<PlayerKey, PlayerYearRecord>;

pub type CohortId = (Drill, u16);
