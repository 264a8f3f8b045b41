use std::fs;
use std::path::Path;

use crate::input::InputError;
use crate::model::record::{PlayerYearRecord, RecordMap};

pub fn load_state(path: &Path) -> Result<RecordMap, InputError> {
    let text = fs::read_to_string(path)?;
    let records: Vec<PlayerYearRecord> = serde_json::from_str(&text)?;
    let mut map = RecordMap::new();
    for record in records {
        let key = record.key.clone();
        if map.insert(key.clone(), record).is_some() {
            return Err(InputError::InvalidInput(format!(
                "duplicate player key in state file: {key}"
            )));
        }
    }
    Ok(map)
}

// Write-then-rename keeps the previous state intact on a crash mid-save.
pub fn save_state(path: &Path, records: &RecordMap) -> Result<(), InputError> {
    let list: Vec<&PlayerYearRecord> = records.values().collect();
    let json = serde_json::to_string_pretty(&list)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/state.rs"]
mod tests;
