use crate::classify::{AgeBand, Classified, RaceGroup, Sex};

/// A grouping attribute. Declaration order is the row sort priority of the
/// published tables: disability, then age band, then sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Disability,
    AgeBand,
    Sex,
    RaceGroup,
}

impl Attribute {
    /// Column header used for this attribute in published tables.
    pub fn column_name(self) -> &'static str {
        match self {
            Attribute::Disability => "has_disability",
            Attribute::AgeBand => "age_band",
            Attribute::Sex => "sex",
            Attribute::RaceGroup => "race_group",
        }
    }
}

/// Grouping key of an aggregate cell. Attributes not grouped on are `None`.
///
/// Field order matches `Attribute` so the derived ordering sorts cells by
/// disability, age band, sex and finally race group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub has_disability: Option<bool>,
    pub age_band: Option<AgeBand>,
    pub sex: Option<Sex>,
    pub race_group: Option<RaceGroup>,
}

impl CellKey {
    /// Project a classified record onto the given attributes.
    pub fn project(record: &Classified, attributes: &[Attribute]) -> Self {
        attributes.iter().fold(CellKey::default(), |key, &attr| match attr {
            Attribute::Disability => CellKey { has_disability: Some(record.has_disability), ..key },
            Attribute::AgeBand => CellKey { age_band: Some(record.age_band), ..key },
            Attribute::Sex => CellKey { sex: Some(record.sex), ..key },
            Attribute::RaceGroup => CellKey { race_group: Some(record.race_group), ..key },
        })
    }

    /// The same key with `attr` ungrouped.
    pub fn without(self, attr: Attribute) -> Self {
        match attr {
            Attribute::Disability => CellKey { has_disability: None, ..self },
            Attribute::AgeBand => CellKey { age_band: None, ..self },
            Attribute::Sex => CellKey { sex: None, ..self },
            Attribute::RaceGroup => CellKey { race_group: None, ..self },
        }
    }

    /// Label of the value held for `attr`, if grouped.
    pub fn label(&self, attr: Attribute) -> Option<&'static str> {
        match attr {
            Attribute::Disability => self.has_disability.map(|d| if d { "true" } else { "false" }),
            Attribute::AgeBand => self.age_band.map(AgeBand::label),
            Attribute::Sex => self.sex.map(Sex::label),
            Attribute::RaceGroup => self.race_group.map(RaceGroup::label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Classified {
        Classified {
            sex: Sex::Female,
            age_band: AgeBand::Age06To18,
            race_group: RaceGroup::Asian,
            has_disability: true,
            weight: 1.0,
        }
    }

    #[test]
    fn project_keeps_only_requested_attributes() {
        let key = CellKey::project(&record(), &[Attribute::Sex, Attribute::RaceGroup]);
        assert_eq!(key, CellKey { sex: Some(Sex::Female), race_group: Some(RaceGroup::Asian), ..Default::default() });
        assert_eq!(key.without(Attribute::RaceGroup), CellKey { sex: Some(Sex::Female), ..Default::default() });
    }

    #[test]
    fn labels() {
        let key = CellKey::project(&record(), &[Attribute::Disability, Attribute::AgeBand]);
        assert_eq!(key.label(Attribute::Disability), Some("true"));
        assert_eq!(key.label(Attribute::AgeBand), Some("06_18"));
        assert_eq!(key.label(Attribute::Sex), None);
    }

    #[test]
    fn ordering_follows_table_priority() {
        let a = CellKey { has_disability: Some(false), age_band: Some(AgeBand::Age65Plus), sex: Some(Sex::Female), race_group: None };
        let b = CellKey { has_disability: Some(true), age_band: Some(AgeBand::Age00To05), sex: Some(Sex::Male), race_group: None };
        assert!(a < b);

        let male = CellKey { age_band: Some(AgeBand::Age19To64), sex: Some(Sex::Male), ..Default::default() };
        let female = CellKey { age_band: Some(AgeBand::Age19To64), sex: Some(Sex::Female), ..Default::default() };
        assert!(male < female);
    }
}
