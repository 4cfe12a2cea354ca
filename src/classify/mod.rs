mod age;
mod disability;
mod race;
mod sex;

pub use age::AgeBand;
pub use disability::has_disability;
pub use race::RaceGroup;
pub use sex::Sex;

use crate::survey::Record;

/// Attributes derived from one record, plus the weight it contributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classified {
    pub sex: Sex,
    pub age_band: AgeBand,
    pub race_group: RaceGroup,
    pub has_disability: bool,
    pub weight: f64,
}

/// Derive all attributes of a record. Pure and total: unmapped codes land in
/// the `Unclassified` variant of their attribute.
pub fn classify(record: &Record) -> Classified {
    Classified {
        sex: Sex::from_code(record.sex),
        age_band: AgeBand::from_age(record.age),
        race_group: RaceGroup::from_codes(record.race, record.hispan),
        has_disability: has_disability(&record.disability),
        weight: record.effective_weight(),
    }
}

pub fn classify_all(records: &[Record]) -> Vec<Classified> {
    records.iter().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_example_records() {
        let first = Record { sex: Some(1), age: Some(30), race: Some(1), hispan: Some(0), weight: Some(10.0), ..Default::default() };
        let second = Record { sex: Some(2), age: Some(70), race: Some(2), hispan: Some(1), weight: Some(5.0), ..Default::default() };

        let a = classify(&first);
        assert_eq!((a.sex, a.age_band, a.race_group, a.has_disability), (Sex::Male, AgeBand::Age19To64, RaceGroup::White, false));
        assert_eq!(a.weight, 10.0);

        let b = classify(&second);
        assert_eq!((b.sex, b.age_band, b.race_group), (Sex::Female, AgeBand::Age65Plus, RaceGroup::BlackHispanic));
    }

    #[test]
    fn empty_record_is_fully_unclassified() {
        let c = classify(&Record::default());
        assert_eq!(c.sex, Sex::Unclassified);
        assert_eq!(c.age_band, AgeBand::Unclassified);
        assert_eq!(c.race_group, RaceGroup::Unclassified);
        assert!(!c.has_disability);
        assert_eq!(c.weight, 0.0);
    }
}
