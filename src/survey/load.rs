use std::{fs::File, io::Cursor, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use polars::{io::SerReader, prelude::{CsvReadOptions, CsvReader, DataFrame, DataType, StringChunked}};
use tracing::{debug, info, warn};

use crate::error::DataUnavailable;
use super::record::{parse_code, parse_weight, Record, AGE, CITY, DISABILITY_COLUMNS, HISPAN, PERWT, RACE, SEX};

/// Every column is read as text so that malformed numerics never abort the read.
fn survey_csv_options(separator: u8) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|po| po.with_separator(separator))
}

/// Reads a delimited survey file from `path` into a Polars DataFrame of string columns.
pub fn read_survey(path: &Path, separator: u8) -> Result<DataFrame> {
    let file = File::open(path)
        .map_err(|source| DataUnavailable::Unreadable { path: path.to_path_buf(), source })?;
    let df = CsvReader::new(file)
        .with_options(survey_csv_options(separator))
        .finish()
        .map_err(|source| DataUnavailable::Malformed { path: path.to_path_buf(), source })?;
    Ok(df)
}

/// Reads delimited survey text held in memory.
pub fn read_survey_str(csv: &str, separator: u8) -> Result<DataFrame> {
    let df = CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(survey_csv_options(separator))
        .finish()
        .map_err(|source| DataUnavailable::Malformed { path: PathBuf::from("<memory>"), source })?;
    Ok(df)
}

/// Fetch a required column as text, casting if the frame was built with typed columns.
fn text_column(df: &DataFrame, name: &'static str) -> Result<StringChunked> {
    let column = df.column(name)
        .map_err(|_| DataUnavailable::MissingColumn { column: name })?;
    let text = column.cast(&DataType::String)
        .with_context(|| format!("[survey::read] Column {name} cannot be read as text"))?;
    Ok(text.str()?.clone())
}

/// Convert a survey DataFrame into records, parsing each coded field tolerantly.
pub fn records_from_frame(df: &DataFrame) -> Result<Vec<Record>> {
    let city = text_column(df, CITY)?;
    let sex = text_column(df, SEX)?;
    let age = text_column(df, AGE)?;
    let race = text_column(df, RACE)?;
    let hispan = text_column(df, HISPAN)?;
    let weight = text_column(df, PERWT)?;
    let disability = DISABILITY_COLUMNS.iter()
        .map(|&name| text_column(df, name))
        .collect::<Result<Vec<_>>>()?;

    Ok((0..df.height())
        .map(|i| Record {
            city: parse_code(city.get(i)),
            sex: parse_code(sex.get(i)),
            age: parse_code(age.get(i)),
            race: parse_code(race.get(i)),
            hispan: parse_code(hispan.get(i)),
            disability: std::array::from_fn(|k| parse_code(disability[k].get(i))),
            weight: parse_weight(weight.get(i)),
        })
        .collect())
}

/// Keep only the records of the target city. An empty result is fatal.
pub fn filter_city(records: Vec<Record>, city: i64) -> Result<Vec<Record>> {
    let filtered = records.into_iter()
        .filter(|record| record.city == Some(city))
        .collect::<Vec<_>>();

    if filtered.is_empty() {
        return Err(DataUnavailable::NoRecords { city }.into());
    }
    Ok(filtered)
}

/// Read the survey file at `path` and restrict it to the records of `city`.
pub fn load(path: &Path, city: i64, separator: u8) -> Result<Vec<Record>> {
    let df = read_survey(path, separator)?;
    let records = records_from_frame(&df)?;
    info!("[survey::load] read {} rows from {}", records.len(), path.display());

    let records = filter_city(records, city)?;
    info!("[survey::load] kept {} rows for city {}", records.len(), city);

    let absent = records.iter().filter(|r| r.weight.is_none()).count();
    if absent > 0 {
        debug!("[survey::load] {} rows have no usable weight and count as zero", absent);
    }
    let negative = records.iter().filter(|r| r.weight.is_some_and(|w| w < 0.0)).count();
    if negative > 0 {
        warn!("[survey::load] {} rows have a negative weight and count as zero", negative);
    }

    Ok(records)
}
