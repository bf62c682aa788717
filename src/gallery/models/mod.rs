//! # Models Module
//!
//! Plain data held by the gallery: the immutable country records and the
//! store that owns their canonical order and the two sort toggles.

pub mod country;
pub mod store;

pub use country::{records_from_json, CountryRecord};
pub use store::{DataStore, LoadPhase, SortDirection, SortKey};
