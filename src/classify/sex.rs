use std::fmt;

/// Declaration order is the published row order: Male before Female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Male,
    Female,
    Unclassified,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Unclassified];

    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Sex::Male,
            Some(2) => Sex::Female,
            _ => Sex::Unclassified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}
