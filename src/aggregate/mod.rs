mod key;
mod marginals;

use std::collections::BTreeMap;

use anyhow::Result;

pub use key::{Attribute, CellKey};
pub use marginals::Marginals;

use crate::{classify::Classified, error::DataUnavailable};

/// Grouping of the sex × age × race table.
pub const TABLE_A_KEYS: [Attribute; 3] = [Attribute::Sex, Attribute::AgeBand, Attribute::RaceGroup];

/// Grouping of the sex × age × race × disability table.
pub const TABLE_B_KEYS: [Attribute; 4] = [Attribute::Sex, Attribute::AgeBand, Attribute::RaceGroup, Attribute::Disability];

/// One group of a weighted aggregate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub key: CellKey,
    /// Sum of weights of the records in this group.
    pub population: f64,
    /// `population` as a percentage of the global total.
    pub share: f64,
}

/// Weighted totals per observed key combination, ordered by key.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    attributes: Vec<Attribute>,
    total: f64,
    cells: Vec<Cell>,
}

/// Sum in ascending order so the result does not depend on input row order.
fn ordered_sum(mut weights: Vec<f64>) -> f64 {
    weights.sort_by(f64::total_cmp);
    weights.iter().sum()
}

/// Total weighted population of the filtered dataset, the denominator of every share.
pub fn total_population(records: &[Classified]) -> Result<f64> {
    let total = ordered_sum(records.iter().map(|r| r.weight).collect());
    if total <= 0.0 {
        return Err(DataUnavailable::ZeroPopulation.into());
    }
    Ok(total)
}

impl Aggregate {
    /// Group `records` by `attributes` and sum their weights.
    /// Shares are taken against `total`, which is shared across aggregates.
    pub fn compute(records: &[Classified], attributes: &[Attribute], total: f64) -> Self {
        let mut groups: BTreeMap<CellKey, Vec<f64>> = BTreeMap::new();
        for record in records {
            groups.entry(CellKey::project(record, attributes))
                .or_default()
                .push(record.weight);
        }

        let cells = groups.into_iter()
            .map(|(key, weights)| {
                let population = ordered_sum(weights);
                Cell { key, population, share: population / total * 100.0 }
            })
            .collect();

        let mut attributes = attributes.to_vec();
        attributes.sort();
        attributes.dedup();

        Self { attributes, total, cells }
    }

    /// Grouped attributes, in sort priority order.
    #[inline] pub fn attributes(&self) -> &[Attribute] { &self.attributes }

    #[inline] pub fn total(&self) -> f64 { self.total }

    #[inline] pub fn cells(&self) -> &[Cell] { &self.cells }

    pub fn get(&self, key: &CellKey) -> Option<&Cell> {
        self.cells.binary_search_by(|cell| cell.key.cmp(key))
            .ok()
            .map(|i| &self.cells[i])
    }

    /// Sum of shares over all cells.
    pub fn share_sum(&self) -> f64 {
        self.cells.iter().map(|cell| cell.share).sum()
    }
}
