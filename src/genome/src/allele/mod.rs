use std::{fmt::{self, Display, Formatter}, str::FromStr};

mod error;
pub use error::ParseAlleleError;

/// Bi-allelic locus symbol.
/// Encoded as '1' (first allele) and '2' (second allele) within haplotype records.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum Allele { One, Two }

impl Allele {
    pub const ALL: [Allele; 2] = [Allele::One, Allele::Two];

    /// Pick an allele from a fair coin toss. `false` -> `One`, `true` -> `Two`
    #[must_use]
    pub fn from_bool(b: bool) -> Self {
        Self::ALL[usize::from(b)]
    }
}

impl From<Allele> for char {
    fn from(value: Allele) -> Self {
        match value {
            Allele::One => '1',
            Allele::Two => '2',
        }
    }
}

impl FromStr for Allele {
    type Err = ParseAlleleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            _   => Err(ParseAlleleError(s.to_string())),
        }
    }
}

impl Display for Allele {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&char::from(*self), f)
    }
}
