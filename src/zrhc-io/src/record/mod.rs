use std::{fmt::{self, Display, Formatter}, str::FromStr};

use genome::{Genotype, HaplotypePair, Sex};
use pedigree::Individual;
use located_error::prelude::*;

mod error;
pub use error::RecordError;

/// Prefix of the comment lines carrying the ground-truth haplotypes within a genotyped pedigree file.
pub const HAPLOTYPES_PREFIX: &str = "# GENERATED_HAPLOTYPES";

/// Marker of a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Number of leading pedigree columns: `family id father mother gender phenotype`
pub const PEDIGREE_FIELDS: usize = 6;

/// Split a tab-separated record into its pedigree columns and its per-locus fields.
/// Trailing empty fields (e.g. a record spanning zero loci) are ignored.
fn split_record(line: &str) -> Result<(Individual, Vec<&str>), RecordError> {
    let fields: Vec<&str> = line.trim_end_matches(['\n', '\r']).split('\t').collect();
    if fields.len() < PEDIGREE_FIELDS {
        return Err(RecordError::MissingFields { expected: PEDIGREE_FIELDS, got: fields.len() })
    }

    let (columns, loci) = fields.split_at(PEDIGREE_FIELDS);
    let [family, id, father, mother, gender, phenotype] = [0, 1, 2, 3, 4, 5].map(|i| columns[i].trim());
    let individual = Individual::new(id, Some(father), Some(mother), gender.parse::<Sex>()?)
        .with_family(family)
        .with_phenotype(phenotype);

    let mut loci = loci.to_vec();
    while loci.last().is_some_and(|field| field.trim().is_empty()) {
        loci.pop();
    }
    Ok((individual, loci))
}

/// A genotyped pedigree record: `family id father mother gender phenotype g_1 ... g_L`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeRecord {
    pub individual: Individual,
    pub genotypes : Vec<Genotype>,
}

impl FromStr for GenotypeRecord {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (individual, loci) = split_record(s).loc("While parsing genotype record")?;
        let genotypes = loci.iter().enumerate()
            .map(|(i, field)| field.parse::<Genotype>().with_loc(|| RecordError::InvalidGenotype(i + 1)))
            .collect::<Result<Vec<Genotype>>>()
            .with_loc(|| format!("While parsing the genotypes of individual {}", individual.id))?;
        Ok(Self { individual, genotypes })
    }
}

impl Display for GenotypeRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.individual)?;
        self.genotypes.iter().try_for_each(|g| write!(f, "\t{g}"))
    }
}

/// A phased pedigree record: `family id father mother gender phenotype h_1 ... h_L`, where `h_i` is `<paternal>|<maternal>`.
/// This is the record shape used by solvers to report their haplotype configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhasedRecord {
    pub individual: Individual,
    pub haplotypes: HaplotypePair,
}

impl FromStr for PhasedRecord {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (individual, loci) = split_record(s).loc("While parsing phased record")?;
        let haplotypes = HaplotypePair::from_loci(loci)
            .with_loc(|| RecordError::InvalidHaplotypes)
            .with_loc(|| format!("While parsing the haplotypes of individual {}", individual.id))?;
        Ok(Self { individual, haplotypes })
    }
}

impl Display for PhasedRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.individual)?;
        self.haplotypes.loci().try_for_each(|locus| write!(f, "\t{locus}"))
    }
}

/// Ground-truth haplotypes, stored as a distinguished comment line:
/// `# GENERATED_HAPLOTYPES family id father mother gender phenotype h_1 ... h_L`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaplotypeRecord(pub PhasedRecord);

impl HaplotypeRecord {
    /// Does this line carry ground-truth haplotypes ?
    #[must_use]
    pub fn matches(line: &str) -> bool {
        line.starts_with(HAPLOTYPES_PREFIX)
    }

    #[must_use]
    pub fn into_inner(self) -> PhasedRecord {
        self.0
    }
}

impl FromStr for HaplotypeRecord {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let payload = s.strip_prefix(HAPLOTYPES_PREFIX)
            .with_loc(|| RecordError::MissingPrefix(HAPLOTYPES_PREFIX))?
            .trim_start_matches([' ', '\t']);
        Ok(Self(payload.parse::<PhasedRecord>().loc("While parsing haplotype record")?))
    }
}

impl Display for HaplotypeRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{HAPLOTYPES_PREFIX}\t{}", self.0)
    }
}
