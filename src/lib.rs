#![doc = "popshare public API"]
mod aggregate;
mod classify;
mod error;
mod io;
mod pipeline;
mod survey;
mod table;

#[doc(inline)]
pub use error::DataUnavailable;

#[doc(inline)]
pub use survey::{Record, filter_city, load, read_survey, read_survey_str, records_from_frame};

#[doc(inline)]
pub use classify::{AgeBand, Classified, RaceGroup, Sex, classify, classify_all, has_disability};

#[doc(inline)]
pub use aggregate::{Aggregate, Attribute, Cell, CellKey, Marginals, TABLE_A_KEYS, TABLE_B_KEYS, total_population};

#[doc(inline)]
pub use table::{RACE_BY_SEX_AGE, RACE_BY_SEX_AGE_DISABILITY, TableLayout, WideTable};

#[doc(inline)]
pub use io::write_csv_string;

#[doc(inline)]
pub use pipeline::{DEFAULT_CITY, PipelineConfig, PublishedTable, Report, build_report, run, write_report};
