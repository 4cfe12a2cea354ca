use std::{io, path::PathBuf};

use polars::prelude::PolarsError;

/// Conditions under which no table can be produced. Any of these aborts the run
/// before either output file is written.
///
/// Functions in this crate return `anyhow::Result`; these variants travel inside
/// the `anyhow::Error` and can be recovered with `downcast_ref::<DataUnavailable>()`.
#[derive(Debug, thiserror::Error)]
pub enum DataUnavailable {
    #[error("cannot read survey file {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("survey file {} is not valid delimited text", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("survey file is missing required column {column:?}")]
    MissingColumn { column: &'static str },

    #[error("no survey records for city {city}")]
    NoRecords { city: i64 },

    #[error("filtered survey records carry no weight")]
    ZeroPopulation,
}
