pub mod cohorts;
pub mod merge;
pub mod percentiles;
pub mod reconcile;
