use std::fmt::Write;

use crate::model::drill::Drill;
use crate::model::record::RecordMap;
use crate::report::format_value;

pub const GRID_LEVELS: [u8; 16] = [
    25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 99,
];

// Linear interpolation between neighbouring order statistics.
pub fn interpolated_percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn render_grid_csv(records: &RecordMap) -> String {
    let mut columns: Vec<(Drill, Vec<f64>)> = Vec::with_capacity(Drill::ALL.len());
    for drill in Drill::ALL {
        let mut values: Vec<f64> = records
            .values()
            .filter_map(|r| r.values.get(&drill).copied())
            .collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        columns.push((drill, values));
    }

    let mut out = String::new();
    out.push_str("Percentile");
    for (drill, _) in &columns {
        let _ = write!(out, ",{}", drill.label().replace(' ', "_"));
    }
    out.push('\n');

    for level in GRID_LEVELS {
        let _ = write!(out, "{level}");
        for (_, values) in &columns {
            match interpolated_percentile(values, f64::from(level)) {
                Some(v) => {
                    let _ = write!(out, ",{}", format_value(v));
                }
                None => out.push(','),
            }
        }
        out.push('\n');
    }
    out
}
