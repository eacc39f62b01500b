use std::{fmt::{self, Display, Formatter}, ops::Deref};

use itertools::Itertools;
use located_error::prelude::*;

use crate::{Allele, Genotype};

mod error;
pub use error::HaplotypeError;

/// Separator between the paternal and maternal allele of a phased locus (e.g. `1|2`)
pub const PHASE_SEPARATOR: char = '|';

/// Which of an individual's two strands is being referred to.
/// Used as a transmission bit: `Paternal` = 0, `Maternal` = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrandOrigin { Paternal, Maternal }

impl StrandOrigin {
    #[must_use]
    pub fn from_bool(b: bool) -> Self {
        if b { Self::Maternal } else { Self::Paternal }
    }
}

impl Display for StrandOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paternal => "paternal",
            Self::Maternal => "maternal",
        })
    }
}

/// The pair of transmission bits of a single offspring.
/// - `father`: which strand of the father becomes the offspring's paternal strand.
/// - `mother`: which strand of the mother becomes the offspring's maternal strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmissionSource {
    pub father: StrandOrigin,
    pub mother: StrandOrigin,
}

/// A whole chromosomal strand, spanning every locus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Strand(Vec<Allele>);

impl Strand {
    #[must_use]
    pub fn new(alleles: Vec<Allele>) -> Self {
        Self(alleles)
    }
}

impl Deref for Strand {
    type Target = [Allele];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Allele> for Strand {
    fn from_iter<I: IntoIterator<Item = Allele>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Phased haplotypes of an individual: one paternal and one maternal strand of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaplotypePair {
    paternal: Strand,
    maternal: Strand,
}

impl HaplotypePair {
    /// # Errors
    /// - `HaplotypeError::LengthMismatch` if both strands do not span the same number of loci.
    pub fn new(paternal: Strand, maternal: Strand) -> Result<Self, HaplotypeError> {
        if paternal.len() != maternal.len() {
            return Err(HaplotypeError::LengthMismatch { paternal: paternal.len(), maternal: maternal.len() })
        }
        Ok(Self { paternal, maternal })
    }

    /// Build an offspring's haplotypes by copying one whole strand of each parent.
    /// A single bit governs each strand, hence no recombination may ever occur.
    #[must_use]
    pub fn inherit(father: &Self, mother: &Self, source: TransmissionSource) -> Self {
        Self {
            paternal: father.strand(source.father).clone(),
            maternal: mother.strand(source.mother).clone(),
        }
    }

    /// Parse a sequence of phased loci (`"1|2"`, `"2|2"`, ...).
    pub fn from_loci<'a, I>(loci: I) -> Result<Self>
    where I: IntoIterator<Item = &'a str>
    {
        let (paternal, maternal): (Vec<Allele>, Vec<Allele>) = loci.into_iter()
            .map(parse_phased_locus)
            .collect::<Result<Vec<(Allele, Allele)>>>()?
            .into_iter()
            .unzip();
        Ok(Self::new(Strand::new(paternal), Strand::new(maternal))?)
    }

    #[must_use]
    pub fn paternal(&self) -> &Strand {
        &self.paternal
    }

    #[must_use]
    pub fn maternal(&self) -> &Strand {
        &self.maternal
    }

    #[must_use]
    pub fn strand(&self, origin: StrandOrigin) -> &Strand {
        match origin {
            StrandOrigin::Paternal => &self.paternal,
            StrandOrigin::Maternal => &self.maternal,
        }
    }

    /// Does `strand` match either one of our two strands ?
    #[must_use]
    pub fn transmits(&self, strand: &Strand) -> bool {
        self.paternal == *strand || self.maternal == *strand
    }

    /// Return a copy of this pair with the paternal and maternal labels exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self { paternal: self.maternal.clone(), maternal: self.paternal.clone() }
    }

    /// Number of loci spanned by this pair.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paternal.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paternal.is_empty()
    }

    /// Unordered genotype of every locus.
    pub fn genotypes(&self) -> impl Iterator<Item = Genotype> + '_ {
        self.paternal.iter().zip(self.maternal.iter())
            .map(|(p, m)| Genotype::from_alleles(*p, *m))
    }

    /// Phased loci, formatted as `<paternal>|<maternal>`.
    pub fn loci(&self) -> impl Iterator<Item = String> + '_ {
        self.paternal.iter().zip(self.maternal.iter())
            .map(|(p, m)| format!("{p}{PHASE_SEPARATOR}{m}"))
    }
}

/// Tab-separated list of phased loci.
impl Display for HaplotypePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.loci().join("\t"))
    }
}

fn parse_phased_locus(field: &str) -> Result<(Allele, Allele)> {
    let (paternal, maternal) = field.trim()
        .split_once(PHASE_SEPARATOR)
        .with_loc(|| HaplotypeError::InvalidLocus(field.to_string()))?;
    let paternal = paternal.parse::<Allele>().with_loc(|| HaplotypeError::InvalidLocus(field.to_string()))?;
    let maternal = maternal.parse::<Allele>().with_loc(|| HaplotypeError::InvalidLocus(field.to_string()))?;
    Ok((paternal, maternal))
}
