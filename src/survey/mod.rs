mod load;
mod record;

pub use load::{filter_city, load, read_survey, read_survey_str, records_from_frame};
pub use record::Record;
