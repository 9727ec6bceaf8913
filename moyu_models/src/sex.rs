use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown biological sex {0}")]
pub struct UnknownBiologicalSex(pub String);

impl BiologicalSex {
    pub const ALL: [BiologicalSex; 2] = [BiologicalSex::Male, BiologicalSex::Female];

    pub fn label(self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BiologicalSex {
    type Err = UnknownBiologicalSex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sex| sex.label() == s)
            .ok_or_else(|| UnknownBiologicalSex(s.to_owned()))
    }
}
