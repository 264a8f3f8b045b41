use std::fmt::Write;

use crate::model::drill::Drill;
use crate::model::record::RecordMap;
use crate::report::{csv_cell, format_value};

// 60_time -> 60_pct, broad_ft -> broad_pct
pub fn pct_column(drill: Drill) -> String {
    let prefix = drill.column().split('_').next().unwrap_or(drill.column());
    format!("{prefix}_pct")
}

pub fn at_column(drill: Drill) -> String {
    let prefix = drill.column().split('_').next().unwrap_or(drill.column());
    format!("{prefix}_at")
}

pub fn render_rows_csv(records: &RecordMap) -> String {
    let mut out = String::new();
    out.push_str("name,grad_year");
    for drill in Drill::ALL {
        let _ = write!(
            out,
            ",{},{},{}",
            drill.column(),
            pct_column(drill),
            at_column(drill)
        );
    }
    out.push('\n');

    for record in records.values() {
        let _ = write!(
            out,
            "{},{}",
            csv_cell(&record.display_name),
            record.key.graduation_year
        );
        for drill in Drill::ALL {
            let value = record
                .values
                .get(&drill)
                .map(|&v| format_value(v))
                .unwrap_or_default();
            let pct = record
                .percentiles
                .get(&drill)
                .map(|&p| format_value(p))
                .unwrap_or_default();
            let at = record
                .provenance
                .get(&drill)
                .and_then(|p| p.observed_at.as_deref())
                .unwrap_or_default();
            let _ = write!(out, ",{value},{pct},{}", csv_cell(at));
        }
        out.push('\n');
    }
    out
}
