pub mod drill;
pub mod observation;
pub mod record;
