use std::{fmt::{self, Formatter, Display}, str::FromStr, result::Result};

mod error;
pub use error::ParseSexError;

/// Gender tag of a pedigree individual. Encoded as `1` (male), `2` (female)
/// and `0` (unspecified) within pedigree records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified
}

impl Sex {
    /// Human readable label, used for logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male        => "male",
            Self::Female      => "female",
            Self::Unspecified => "unspecified",
        }
    }
}

impl FromStr for Sex {
    type Err = ParseSexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "male"        | "1" => Self::Male,
            "female"      | "2" => Self::Female,
            "unspecified" | "0" => Self::Unspecified,
            _                   => return Err(ParseSexError(s.to_string())),
        })
    }
}

/// Record encoding of the gender tag.
impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male        => "1",
            Self::Female      => "2",
            Self::Unspecified => "0",
        })
    }
}
