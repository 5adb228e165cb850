//! Providers Module - External Data Sources
//!
//! Live property-records lookups.

pub mod property_records;

pub use property_records::*;
