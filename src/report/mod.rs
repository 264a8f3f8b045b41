use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::model::record::RecordMap;

pub mod grid;
pub mod rows;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub raw_rows: usize,
    pub observations: usize,
    pub rejected_rows: usize,
    pub rejected_values: usize,
    pub filtered_rows: usize,
    pub applied: usize,
    pub superseded: usize,
    pub new_records: usize,
    pub records_total: usize,
    pub cohorts_recomputed: usize,
}

pub fn write_reports(
    records: &RecordMap,
    summary: &RunSummary,
    out_dir: &Path,
    with_grid: bool,
) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join("player_years.csv"), rows::render_rows_csv(records))?;
    if with_grid {
        fs::write(
            out_dir.join("percentile_grid.csv"),
            grid::render_grid_csv(records),
        )?;
    }
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    fs::write(out_dir.join("summary.json"), json)?;
    Ok(())
}

pub fn format_value(v: f64) -> String {
    format!("{v:.2}")
}

pub fn csv_cell(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
