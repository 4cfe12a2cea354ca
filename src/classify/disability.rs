/// Indicator code meaning "has this difficulty".
pub(crate) const DISABILITY_YES: i64 = 2;

/// True if any indicator equals the "yes" code. Missing indicators count as "no".
pub fn has_disability(indicators: &[Option<i64>]) -> bool {
    indicators.iter().any(|&code| code == Some(DISABILITY_YES))
}
