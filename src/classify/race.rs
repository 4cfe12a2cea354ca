use std::fmt;

/// Race/ethnicity groups. Declaration order is the published column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RaceGroup {
    White,
    Asian,
    MixedRace,
    Hispanic,
    BlackHispanic,
    Black,
    NativeAmerican,
    Other,
    /// No rule matched, e.g. Hispanic origin not reported.
    Unclassified,
}

// General race codes.
const WHITE: i64 = 1;
const BLACK: i64 = 2;
const NATIVE_AMERICAN: i64 = 3;
const CHINESE: i64 = 4;
const JAPANESE: i64 = 5;
const OTHER_ASIAN: i64 = 6;
const OTHER_RACE: i64 = 7;
const TWO_RACES: i64 = 8;
const THREE_OR_MORE_RACES: i64 = 9;

// Hispanic-origin codes; 9 ("not reported") matches neither.
const NOT_HISPANIC: i64 = 0;
const HISPANIC_ORIGINS: [i64; 4] = [1, 2, 3, 4];

enum RaceCodes {
    OneOf(&'static [i64]),
    /// Any race other than the given code, including a missing one.
    Not(i64),
}

enum Origin {
    NotHispanic,
    Hispanic,
}

struct Rule {
    race: RaceCodes,
    origin: Origin,
    group: RaceGroup,
}

impl Rule {
    fn matches(&self, race: Option<i64>, hispan: Option<i64>) -> bool {
        let race_ok = match self.race {
            RaceCodes::OneOf(codes) => race.is_some_and(|r| codes.contains(&r)),
            RaceCodes::Not(code) => race != Some(code),
        };
        let origin_ok = match self.origin {
            Origin::NotHispanic => hispan == Some(NOT_HISPANIC),
            Origin::Hispanic => hispan.is_some_and(|h| HISPANIC_ORIGINS.contains(&h)),
        };
        race_ok && origin_ok
    }
}

/// Evaluated top to bottom; the first match wins. Later rules rely on earlier
/// ones, e.g. a Black respondent of Hispanic origin never reaches `Hispanic`.
const RULES: [Rule; 8] = [
    Rule { race: RaceCodes::OneOf(&[WHITE]), origin: Origin::NotHispanic, group: RaceGroup::White },
    Rule { race: RaceCodes::OneOf(&[CHINESE, JAPANESE, OTHER_ASIAN]), origin: Origin::NotHispanic, group: RaceGroup::Asian },
    Rule { race: RaceCodes::OneOf(&[TWO_RACES, THREE_OR_MORE_RACES]), origin: Origin::NotHispanic, group: RaceGroup::MixedRace },
    Rule { race: RaceCodes::Not(BLACK), origin: Origin::Hispanic, group: RaceGroup::Hispanic },
    Rule { race: RaceCodes::OneOf(&[BLACK]), origin: Origin::Hispanic, group: RaceGroup::BlackHispanic },
    Rule { race: RaceCodes::OneOf(&[BLACK]), origin: Origin::NotHispanic, group: RaceGroup::Black },
    Rule { race: RaceCodes::OneOf(&[NATIVE_AMERICAN]), origin: Origin::NotHispanic, group: RaceGroup::NativeAmerican },
    Rule { race: RaceCodes::OneOf(&[OTHER_RACE]), origin: Origin::NotHispanic, group: RaceGroup::Other },
];

impl RaceGroup {
    pub const ALL: [RaceGroup; 9] = [
        RaceGroup::White,
        RaceGroup::Asian,
        RaceGroup::MixedRace,
        RaceGroup::Hispanic,
        RaceGroup::BlackHispanic,
        RaceGroup::Black,
        RaceGroup::NativeAmerican,
        RaceGroup::Other,
        RaceGroup::Unclassified,
    ];

    /// Classify from the race and Hispanic-origin codes alone.
    pub fn from_codes(race: Option<i64>, hispan: Option<i64>) -> Self {
        RULES.iter()
            .find(|rule| rule.matches(race, hispan))
            .map_or(RaceGroup::Unclassified, |rule| rule.group)
    }

    pub fn label(self) -> &'static str {
        match self {
            RaceGroup::White => "White",
            RaceGroup::Asian => "Asian",
            RaceGroup::MixedRace => "Mixed_race",
            RaceGroup::Hispanic => "Hispanic",
            RaceGroup::BlackHispanic => "Black_hispanic",
            RaceGroup::Black => "Black",
            RaceGroup::NativeAmerican => "Native_american",
            RaceGroup::Other => "Other",
            RaceGroup::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for RaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}
