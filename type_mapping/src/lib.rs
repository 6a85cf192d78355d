//! Value model shared by the crudhaus crates
//! This crate provides the values callers hand in, the values bound to drivers, and ordered records

pub mod record;
pub mod serialize;
pub mod types;

pub use record::Record;
pub use serialize::serialize_to_record;
pub use types::{BoundValue, FieldValue};
