use std::collections::BTreeMap;

use anyhow::{ensure, Result};
use polars::{frame::DataFrame, prelude::{Column, NamedFrom}, series::Series};

use crate::{aggregate::{Aggregate, Attribute, CellKey}, classify::RaceGroup};

/// Wide-format share table: one row per non-race key, one column per race group.
///
/// A `None` entry means no record was observed for that exact combination,
/// which is distinct from an observed share of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    key_attributes: Vec<Attribute>,
    columns: Vec<RaceGroup>,
    rows: BTreeMap<CellKey, Vec<Option<f64>>>,
    unpublished_share: f64,
}

impl WideTable {
    /// Pivot race groups of `aggregate` into `columns`.
    ///
    /// Every observed non-race key yields a row, even when all of its cells fall
    /// in race groups outside `columns`; such shares are tallied in
    /// `unpublished_share` instead.
    pub fn pivot(aggregate: &Aggregate, columns: &[RaceGroup]) -> Result<Self> {
        ensure!(
            aggregate.attributes().contains(&Attribute::RaceGroup),
            "[table::pivot] aggregate is not grouped by race group"
        );

        let key_attributes = aggregate.attributes().iter()
            .copied()
            .filter(|&attr| attr != Attribute::RaceGroup)
            .collect::<Vec<_>>();

        let mut rows: BTreeMap<CellKey, Vec<Option<f64>>> = BTreeMap::new();
        let mut unpublished_share = 0.0;
        for cell in aggregate.cells() {
            let row = rows.entry(cell.key.without(Attribute::RaceGroup))
                .or_insert_with(|| vec![None; columns.len()]);
            match cell.key.race_group.and_then(|race| columns.iter().position(|&c| c == race)) {
                Some(i) => row[i] = Some(cell.share),
                None => unpublished_share += cell.share,
            }
        }

        Ok(Self { key_attributes, columns: columns.to_vec(), rows, unpublished_share })
    }

    #[inline] pub fn key_attributes(&self) -> &[Attribute] { &self.key_attributes }

    #[inline] pub fn columns(&self) -> &[RaceGroup] { &self.columns }

    #[inline] pub fn num_rows(&self) -> usize { self.rows.len() }

    /// Rows in published order.
    pub fn rows(&self) -> impl Iterator<Item = (&CellKey, &[Option<f64>])> + '_ {
        self.rows.iter().map(|(key, values)| (key, values.as_slice()))
    }

    /// Share for a row key and race column; `None` if unobserved or not published.
    pub fn share(&self, key: &CellKey, race: RaceGroup) -> Option<f64> {
        let i = self.columns.iter().position(|&c| c == race)?;
        self.rows.get(key)?[i]
    }

    /// Percentage of the total population that falls outside the published columns.
    #[inline] pub fn unpublished_share(&self) -> f64 { self.unpublished_share }

    /// Header names in output order.
    pub fn header(&self) -> Vec<&'static str> {
        self.key_attributes.iter().map(|attr| attr.column_name())
            .chain(self.columns.iter().map(|race| race.label()))
            .collect()
    }

    /// Build the publishable DataFrame: key labels first, then a Float64 share
    /// column per race group with nulls for unobserved cells.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut columns = self.key_attributes.iter()
            .map(|&attr| {
                let labels = self.rows.keys()
                    .map(|key| key.label(attr).unwrap_or_default())
                    .collect::<Vec<_>>();
                Series::new(attr.column_name().into(), labels).into()
            })
            .collect::<Vec<Column>>();

        for (i, race) in self.columns.iter().enumerate() {
            let shares = self.rows.values().map(|values| values[i]).collect::<Vec<_>>();
            columns.push(Series::new(race.label().into(), shares).into());
        }

        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aggregate::{TABLE_A_KEYS, TABLE_B_KEYS},
        classify::{AgeBand, Classified, Sex},
        table::{RACE_BY_SEX_AGE, RACE_BY_SEX_AGE_DISABILITY},
    };

    fn rec(sex: Sex, age_band: AgeBand, race_group: RaceGroup, has_disability: bool, weight: f64) -> Classified {
        Classified { sex, age_band, race_group, has_disability, weight }
    }

    fn records() -> Vec<Classified> {
        vec![
            rec(Sex::Female, AgeBand::Age19To64, RaceGroup::Asian, false, 4.0),
            rec(Sex::Male, AgeBand::Age19To64, RaceGroup::White, false, 10.0),
            rec(Sex::Female, AgeBand::Age65Plus, RaceGroup::BlackHispanic, true, 5.0),
            rec(Sex::Male, AgeBand::Age00To05, RaceGroup::Other, true, 1.0),
        ]
    }

    fn key(age_band: AgeBand, sex: Sex) -> CellKey {
        CellKey { age_band: Some(age_band), sex: Some(sex), ..Default::default() }
    }

    #[test]
    fn rows_follow_age_then_sex_order() {
        let agg = Aggregate::compute(&records(), &TABLE_A_KEYS, 20.0);
        let table = WideTable::pivot(&agg, RACE_BY_SEX_AGE.columns).unwrap();

        let order = table.rows().map(|(k, _)| (k.age_band.unwrap(), k.sex.unwrap())).collect::<Vec<_>>();
        assert_eq!(order, vec![
            (AgeBand::Age00To05, Sex::Male),
            (AgeBand::Age19To64, Sex::Male),
            (AgeBand::Age19To64, Sex::Female),
            (AgeBand::Age65Plus, Sex::Female),
        ]);
        assert_eq!(table.header(), vec![
            "age_band", "sex", "White", "Asian", "Mixed_race", "Hispanic", "Black_hispanic", "Black", "Native_american",
        ]);
    }

    #[test]
    fn unobserved_cells_are_empty_not_zero() {
        let agg = Aggregate::compute(&records(), &TABLE_A_KEYS, 20.0);
        let table = WideTable::pivot(&agg, RACE_BY_SEX_AGE.columns).unwrap();

        let male_adult = key(AgeBand::Age19To64, Sex::Male);
        assert_eq!(table.share(&male_adult, RaceGroup::White), Some(50.0));
        assert_eq!(table.share(&male_adult, RaceGroup::Asian), None);
    }

    #[test]
    fn unpublished_groups_keep_their_row() {
        let agg = Aggregate::compute(&records(), &TABLE_A_KEYS, 20.0);
        let table = WideTable::pivot(&agg, RACE_BY_SEX_AGE.columns).unwrap();

        let toddler = key(AgeBand::Age00To05, Sex::Male);
        assert!(table.rows().any(|(k, values)| *k == toddler && values.iter().all(Option::is_none)));
        assert!((table.unpublished_share() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn disability_table_sorts_disability_first() {
        let agg = Aggregate::compute(&records(), &TABLE_B_KEYS, 20.0);
        let table = WideTable::pivot(&agg, RACE_BY_SEX_AGE_DISABILITY.columns).unwrap();

        assert_eq!(table.key_attributes(), &[Attribute::Disability, Attribute::AgeBand, Attribute::Sex]);
        let flags = table.rows().map(|(k, _)| k.has_disability.unwrap()).collect::<Vec<_>>();
        assert_eq!(flags, vec![false, false, true, true]);
        assert_eq!(table.unpublished_share(), 0.0);
    }

    #[test]
    fn frame_has_nulls_for_unobserved() {
        let agg = Aggregate::compute(&records(), &TABLE_A_KEYS, 20.0);
        let df = WideTable::pivot(&agg, RACE_BY_SEX_AGE.columns).unwrap().to_frame().unwrap();

        assert_eq!(df.height(), 4);
        assert_eq!(df.width(), 9);
        let white = df.column("White").unwrap().f64().unwrap();
        assert_eq!(white.get(1), Some(50.0));
        assert_eq!(white.get(0), None);
        assert_eq!(white.null_count(), 3);
    }

    #[test]
    fn pivot_requires_race_grouping() {
        let agg = Aggregate::compute(&records(), &[Attribute::Sex], 20.0);
        assert!(WideTable::pivot(&agg, RACE_BY_SEX_AGE.columns).is_err());
    }
}
