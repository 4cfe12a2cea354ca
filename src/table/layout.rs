use crate::{aggregate::{Attribute, TABLE_A_KEYS, TABLE_B_KEYS}, classify::RaceGroup};

/// A published table: its file name, grouping and race columns.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub file_name: &'static str,
    pub attributes: &'static [Attribute],
    pub columns: &'static [RaceGroup],
}

/// Sex × age band × race shares. `Other` is not published here.
pub const RACE_BY_SEX_AGE: TableLayout = TableLayout {
    file_name: "race_by_sex_age.csv",
    attributes: &TABLE_A_KEYS,
    columns: &[
        RaceGroup::White,
        RaceGroup::Asian,
        RaceGroup::MixedRace,
        RaceGroup::Hispanic,
        RaceGroup::BlackHispanic,
        RaceGroup::Black,
        RaceGroup::NativeAmerican,
    ],
};

/// Sex × age band × race × disability shares.
pub const RACE_BY_SEX_AGE_DISABILITY: TableLayout = TableLayout {
    file_name: "race_by_sex_age_disability.csv",
    attributes: &TABLE_B_KEYS,
    columns: &[
        RaceGroup::White,
        RaceGroup::Asian,
        RaceGroup::MixedRace,
        RaceGroup::Hispanic,
        RaceGroup::BlackHispanic,
        RaceGroup::Black,
        RaceGroup::NativeAmerican,
        RaceGroup::Other,
    ],
};
