/// City code column.
pub(crate) const CITY: &str = "CITY";
pub(crate) const SEX: &str = "SEX";
pub(crate) const AGE: &str = "AGE";
pub(crate) const RACE: &str = "RACE";
/// Hispanic-origin code column.
pub(crate) const HISPAN: &str = "HISPAN";
/// Person weight column.
pub(crate) const PERWT: &str = "PERWT";

/// The seven disability-indicator columns.
pub(crate) const DISABILITY_COLUMNS: [&str; 7] = [
    "DIFFREM",
    "DIFFPHYS",
    "DIFFMOB",
    "DIFFCARE",
    "DIFFSENS",
    "DIFFEYE",
    "DIFFHEAR",
];

/// One respondent row. Coded fields are `None` when missing or unparseable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub city: Option<i64>,
    pub sex: Option<i64>,
    pub age: Option<i64>,
    pub race: Option<i64>,
    pub hispan: Option<i64>,
    pub disability: [Option<i64>; 7],
    pub weight: Option<f64>,
}

impl Record {
    /// Weight contributed to every total. Absent and negative weights count as zero.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(weight) if weight >= 0.0 => weight,
            _ => 0.0,
        }
    }
}

/// Parse an integer code, tolerating surrounding whitespace and integral floats ("3.0").
pub(crate) fn parse_code(raw: Option<&str>) -> Option<i64> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>().ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64)
    })
}

/// Parse a person weight. Non-finite values are treated as missing.
pub(crate) fn parse_weight(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|w| w.is_finite())
}
