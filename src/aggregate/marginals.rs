use std::fmt;

use crate::classify::Classified;
use super::{Aggregate, Attribute};

/// Single-attribute share breakdowns, printed for cross-checking against
/// published reference figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Marginals {
    pub total: f64,
    pub by_age_band: Aggregate,
    pub by_sex: Aggregate,
    pub by_race_group: Aggregate,
    pub by_disability: Aggregate,
}

impl Marginals {
    pub fn compute(records: &[Classified], total: f64) -> Self {
        Self {
            total,
            by_age_band: Aggregate::compute(records, &[Attribute::AgeBand], total),
            by_sex: Aggregate::compute(records, &[Attribute::Sex], total),
            by_race_group: Aggregate::compute(records, &[Attribute::RaceGroup], total),
            by_disability: Aggregate::compute(records, &[Attribute::Disability], total),
        }
    }

    fn breakdowns(&self) -> [(&'static str, Attribute, &Aggregate); 4] {
        [
            ("age band", Attribute::AgeBand, &self.by_age_band),
            ("sex", Attribute::Sex, &self.by_sex),
            ("race group", Attribute::RaceGroup, &self.by_race_group),
            ("disability", Attribute::Disability, &self.by_disability),
        ]
    }
}

impl fmt::Display for Marginals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total population: {:.0}", self.total)?;
        for (title, attr, aggregate) in self.breakdowns() {
            writeln!(f, "Share by {title}:")?;
            for cell in aggregate.cells() {
                let label = cell.key.label(attr).unwrap_or("?");
                writeln!(f, "  {label:<16} {:>8.3}%  ({:.0})", cell.share, cell.population)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{AgeBand, RaceGroup, Sex};

    fn records() -> Vec<Classified> {
        vec![
            Classified { sex: Sex::Male, age_band: AgeBand::Age19To64, race_group: RaceGroup::White, has_disability: false, weight: 10.0 },
            Classified { sex: Sex::Female, age_band: AgeBand::Age65Plus, race_group: RaceGroup::BlackHispanic, has_disability: true, weight: 5.0 },
        ]
    }

    #[test]
    fn each_breakdown_covers_the_total() {
        let marginals = Marginals::compute(&records(), 15.0);
        for (_, _, aggregate) in marginals.breakdowns() {
            assert!((aggregate.share_sum() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn report_lists_labels_and_shares() {
        let report = Marginals::compute(&records(), 15.0).to_string();
        assert!(report.starts_with("Total population: 15\n"));
        assert!(report.contains("Share by sex:"));
        assert!(report.contains("Male"));
        assert!(report.contains("66.667%"));
        assert!(report.contains("Black_hispanic"));
        assert!(report.contains("true"));
    }
}
