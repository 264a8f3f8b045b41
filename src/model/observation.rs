use serde::{Deserialize, Serialize};

use crate::model::drill::Drill;

/// Key equality is the sole identity rule; no fuzzy matching.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerKey {
    pub name: String,
    pub graduation_year: u16,
}

impl PlayerKey {
    pub fn new(raw_name: &str, graduation_year: u16) -> Self {
        Self {
            name: normalize_name(raw_name),
            graduation_year,
        }
    }
}

impl std::fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.graduation_year)
    }
}

/// Case-fold, strip punctuation, collapse whitespace.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            for lc in c.to_lowercase() {
                out.push(lc);
            }
        } else if c.is_whitespace() {
            pending_space = true;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub player_name: String,
    pub graduation_year: u16,
    pub drill: Drill,
    pub value: f64,
    /// ISO-8601, so lexicographic order is chronological order.
    pub observed_at: Option<String>,
    pub source_record_id: Option<String>,
}

impl RawObservation {
    pub fn key(&self) -> PlayerKey {
        PlayerKey::new(&self.player_name, self.graduation_year)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/observation.rs"]
mod tests;
