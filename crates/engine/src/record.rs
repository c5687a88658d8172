use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender column of the dataset. The on-disk labels are Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Hombre")]
    Male,
    #[serde(rename = "Mujer")]
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Label as it appears in the source file.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Hombre",
            Self::Female => "Mujer",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hombre" => Ok(Self::Male),
            "Mujer" => Ok(Self::Female),
            other => Err(format!("Unknown gender label: {other}")),
        }
    }
}

/// One (year, name, frequency, gender) observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub name: String,
    pub frequency: u64,
    pub gender: Gender,
}

impl Record {
    pub fn new(year: i32, name: impl Into<String>, frequency: u64, gender: Gender) -> Self {
        Self {
            year,
            name: name.into(),
            frequency,
            gender,
        }
    }

    /// `true` when `filter` is `None` or equals this record's gender.
    #[inline]
    #[must_use]
    pub fn matches_gender(&self, filter: Option<Gender>) -> bool {
        filter.is_none_or(|g| g == self.gender)
    }
}
