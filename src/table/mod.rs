mod layout;
mod wide;

pub use layout::{RACE_BY_SEX_AGE, RACE_BY_SEX_AGE_DISABILITY, TableLayout};
pub use wide::WideTable;
