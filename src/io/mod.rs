//! IO helpers for the published tables.
//!
//! - `csv` - CSV serialization of wide tables
//! - `fs` - output directory handling

pub(crate) mod csv;
pub(crate) mod fs;

pub use csv::write_csv_string;
