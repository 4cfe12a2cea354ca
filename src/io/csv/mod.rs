//! CSV format writing operations.

mod write;

pub use write::write_csv_string;
pub(crate) use write::stage_csv;
