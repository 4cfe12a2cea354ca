use std::fmt;

/// Age bands partitioning every non-negative age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBand {
    Age00To05,
    Age06To18,
    Age19To64,
    Age65Plus,
    /// Negative or missing age.
    Unclassified,
}

impl AgeBand {
    pub const ALL: [AgeBand; 5] = [
        AgeBand::Age00To05,
        AgeBand::Age06To18,
        AgeBand::Age19To64,
        AgeBand::Age65Plus,
        AgeBand::Unclassified,
    ];

    pub fn from_age(age: Option<i64>) -> Self {
        match age {
            Some(0..=5) => AgeBand::Age00To05,
            Some(6..=18) => AgeBand::Age06To18,
            Some(19..=64) => AgeBand::Age19To64,
            Some(65..) => AgeBand::Age65Plus,
            _ => AgeBand::Unclassified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBand::Age00To05 => "00_05",
            AgeBand::Age06To18 => "06_18",
            AgeBand::Age19To64 => "19_64",
            AgeBand::Age65Plus => "65_+",
            AgeBand::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

#[cfg(test)]
mod tests {
    use super::AgeBand;

    #[test]
    fn band_edges() {
        let cases = [
            (0, AgeBand::Age00To05),
            (5, AgeBand::Age00To05),
            (6, AgeBand::Age06To18),
            (18, AgeBand::Age06To18),
            (19, AgeBand::Age19To64),
            (64, AgeBand::Age19To64),
            (65, AgeBand::Age65Plus),
            (120, AgeBand::Age65Plus),
        ];
        for (age, band) in cases {
            assert_eq!(AgeBand::from_age(Some(age)), band, "age {age}");
        }
    }

    #[test]
    fn out_of_domain_is_unclassified() {
        assert_eq!(AgeBand::from_age(Some(-1)), AgeBand::Unclassified);
        assert_eq!(AgeBand::from_age(None), AgeBand::Unclassified);
    }

    #[test]
    fn unclassified_sorts_after_every_band() {
        let mut bands = AgeBand::ALL;
        bands.reverse();
        bands.sort();
        assert_eq!(bands, AgeBand::ALL);
        assert_eq!(bands.last(), Some(&AgeBand::Unclassified));
    }

    #[test]
    fn every_non_negative_age_has_a_band() {
        assert!((0..=150).all(|age| AgeBand::from_age(Some(age)) != AgeBand::Unclassified));
    }
}
