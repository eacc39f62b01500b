use genome::{Genotype, HaplotypePair};
use indexmap::IndexMap;

use crate::Pedigree;

/// A genotyped pedigree, along with its haplotype configuration.
/// # Fields:
/// - `pedigree`  : structure of the pedigree.
/// - `haplotypes`: phased haplotypes of each individual. Key = individual id.
/// - `genotypes` : (possibly masked) genotypes of each individual. Key = individual id.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub pedigree  : Pedigree,
    pub haplotypes: IndexMap<String, HaplotypePair>,
    pub genotypes : IndexMap<String, Vec<Genotype>>,
}

impl Dataset {
    #[must_use]
    pub fn new(pedigree: Pedigree, haplotypes: IndexMap<String, HaplotypePair>, genotypes: IndexMap<String, Vec<Genotype>>) -> Self {
        Self { pedigree, haplotypes, genotypes }
    }

    /// Build a dataset whose genotypes are the unmasked projection of each haplotype pair.
    #[must_use]
    pub fn from_haplotypes(pedigree: Pedigree, haplotypes: IndexMap<String, HaplotypePair>) -> Self {
        let genotypes = haplotypes.iter()
            .map(|(id, pair)| (id.clone(), pair.genotypes().collect()))
            .collect();
        Self { pedigree, haplotypes, genotypes }
    }

    #[must_use]
    pub fn haplotypes_of(&self, id: &str) -> Option<&HaplotypePair> {
        self.haplotypes.get(id)
    }

    #[must_use]
    pub fn genotypes_of(&self, id: &str) -> Option<&[Genotype]> {
        self.genotypes.get(id).map(Vec::as_slice)
    }
}
