use std::{fmt::{self, Display, Formatter}, str::FromStr};

use crate::Allele;

mod error;
pub use error::ParseGenotypeError;

/// Unordered single-locus genotype.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum Genotype {
    Missing,
    HomozygousOne,
    HomozygousTwo,
    Heterozygous,
}

impl Genotype {
    /// Project an ordered pair of alleles onto its unordered genotype.
    #[must_use]
    pub fn from_alleles(paternal: Allele, maternal: Allele) -> Self {
        use Allele::{One, Two};
        match (paternal, maternal) {
            (One, One)             => Self::HomozygousOne,
            (Two, Two)             => Self::HomozygousTwo,
            (One, Two) | (Two, One) => Self::Heterozygous,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    #[must_use]
    pub fn is_heterozygous(&self) -> bool {
        matches!(self, Self::Heterozygous)
    }

    #[must_use]
    pub fn is_homozygous(&self) -> bool {
        matches!(self, Self::HomozygousOne | Self::HomozygousTwo)
    }
}

impl FromStr for Genotype {
    type Err = ParseGenotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "0 0"         => Self::Missing,
            "1 1"         => Self::HomozygousOne,
            "2 2"         => Self::HomozygousTwo,
            "1 2" | "2 1" => Self::Heterozygous,
            _             => return Err(ParseGenotypeError(s.to_string())),
        })
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing       => "0 0",
            Self::HomozygousOne => "1 1",
            Self::HomozygousTwo => "2 2",
            Self::Heterozygous  => "1 2",
        })
    }
}
