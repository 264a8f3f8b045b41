use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::input::{InputError, open_maybe_gz};
use crate::model::drill::Drill;
use crate::model::observation::RawObservation;

pub const MIN_YEAR: u16 = 2000;
pub const MAX_YEAR: u16 = 2099;

const NAME_COL: &str = "name";
const YEAR_COL: &str = "grad_year";
const URL_COL: &str = "profile_url";
const TIMESTAMP_COL: &str = "timestamp";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawBatch {
    pub observations: Vec<RawObservation>,
    pub rejected_rows: usize,
    pub rejected_values: usize,
    pub filtered_rows: usize,
    pub total_rows: usize,
}

pub fn load_raw(path: &Path, years: Option<&[u16]>) -> Result<RawBatch, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_raw(&text, years)
}

pub fn parse_raw(text: &str, years: Option<&[u16]>) -> Result<RawBatch, InputError> {
    let mut rows = parse_rows(text);
    if rows.is_empty() {
        return Err(InputError::InvalidInput("raw file has no header row".to_string()));
    }
    let header = rows.remove(0);
    let layout = HeaderLayout::from_header(&header)?;

    let mut batch = RawBatch::default();
    for (line_no, row) in rows.iter().enumerate() {
        let line_no = line_no + 2;
        batch.total_rows += 1;

        let name = layout.field(row, layout.name).trim();
        if name.is_empty() {
            warn!("raw line {line_no}: empty name; row rejected");
            batch.rejected_rows += 1;
            continue;
        }
        let year_raw = layout.field(row, layout.year).trim();
        let year = match year_raw.parse::<u16>() {
            Ok(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => y,
            _ => {
                warn!("raw line {line_no}: bad graduation year {year_raw:?}; row rejected");
                batch.rejected_rows += 1;
                continue;
            }
        };
        if let Some(keep) = years {
            if !keep.contains(&year) {
                batch.filtered_rows += 1;
                continue;
            }
        }

        let observed_at = non_empty(layout.field(row, layout.timestamp));
        let source_record_id = non_empty(layout.field(row, layout.url));

        for (drill, col) in &layout.drills {
            let cell = clean_value(layout.field(row, Some(*col)));
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(value) if value.is_finite() => batch.observations.push(RawObservation {
                    player_name: name.to_string(),
                    graduation_year: year,
                    drill: *drill,
                    value,
                    observed_at: observed_at.clone(),
                    source_record_id: source_record_id.clone(),
                }),
                _ => {
                    warn!(
                        "raw line {line_no}: non-numeric {} value {cell:?}; cell rejected",
                        drill.label()
                    );
                    batch.rejected_values += 1;
                }
            }
        }
    }
    Ok(batch)
}

struct HeaderLayout {
    name: Option<usize>,
    year: Option<usize>,
    url: Option<usize>,
    timestamp: Option<usize>,
    drills: Vec<(Drill, usize)>,
}

impl HeaderLayout {
    fn from_header(header: &[String]) -> Result<Self, InputError> {
        let find = |want: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(want))
        };
        let mut drills: Vec<(Drill, usize)> = header
            .iter()
            .enumerate()
            .filter_map(|(idx, h)| Drill::from_column(h.trim()).map(|d| (d, idx)))
            .collect();
        drills.sort_by_key(|&(d, _)| d);
        let layout = Self {
            name: find(NAME_COL),
            year: find(YEAR_COL),
            url: find(URL_COL),
            timestamp: find(TIMESTAMP_COL),
            drills,
        };
        if layout.name.is_none() || layout.year.is_none() {
            return Err(InputError::InvalidInput(format!(
                "raw header must carry {NAME_COL:?} and {YEAR_COL:?} columns"
            )));
        }
        Ok(layout)
    }

    fn field<'a>(&self, row: &'a [String], idx: Option<usize>) -> &'a str {
        idx.and_then(|i| row.get(i)).map_or("", String::as_str)
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

// Foot mark becomes a decimal point, inch mark is dropped: 8'6" reads 8.6.
fn clean_value(raw: &str) -> String {
    raw.trim()
        .replace('\u{a0}', "")
        .replace('"', "")
        .replace('\'', ".")
}

fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => row.push(std::mem::take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/raw.rs"]
mod tests;
