use std::{fmt::{self, Display, Formatter}, ops::AddAssign};

use genome::{Genotype, HaplotypePair};

/// Absolute discordance between a computed and a generated haplotype pair.
/// - `genotype`       : loci whose unordered genotypes differ.
/// - `paternal`       : loci whose paternal alleles differ.
/// - `maternal`       : loci whose maternal alleles differ.
/// - `masked_paternal`: paternal discordances, restricted to loci whose masked genotype was called.
/// - `masked_maternal`: maternal discordances, restricted to loci whose masked genotype was called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorCounts {
    pub genotype       : usize,
    pub paternal       : usize,
    pub maternal       : usize,
    pub masked_paternal: usize,
    pub masked_maternal: usize,
}

impl ErrorCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.genotype + self.paternal + self.maternal + self.masked_paternal + self.masked_maternal
    }
}

impl AddAssign for ErrorCounts {
    fn add_assign(&mut self, other: Self) {
        self.genotype        += other.genotype;
        self.paternal        += other.paternal;
        self.maternal        += other.maternal;
        self.masked_paternal += other.masked_paternal;
        self.masked_maternal += other.masked_maternal;
    }
}

impl Display for ErrorCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}\t{}", self.genotype, self.paternal, self.maternal, self.masked_paternal, self.masked_maternal)
    }
}

/// Orientation of a computed haplotype pair, relative to the generated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation { AsIs, Swapped }

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AsIs    => "as-is",
            Self::Swapped => "swapped",
        })
    }
}

/// Count the discordances between `result` and `original` at every locus.
/// `genotypes` is the masked genotype sequence of the individual.
#[must_use]
pub fn count_errors(genotypes: &[Genotype], original: &HaplotypePair, result: &HaplotypePair) -> ErrorCounts {
    let mut counts = ErrorCounts::default();
    let loci = original.paternal().iter().zip(original.maternal().iter())
        .zip(result.paternal().iter().zip(result.maternal().iter()))
        .zip(genotypes);

    for (((orig_pat, orig_mat), (res_pat, res_mat)), genotype) in loci {
        let paternal = orig_pat != res_pat;
        let maternal = orig_mat != res_mat;
        let called   = !genotype.is_missing();
        counts.genotype        += usize::from(Genotype::from_alleles(*orig_pat, *orig_mat) != Genotype::from_alleles(*res_pat, *res_mat));
        counts.paternal        += usize::from(paternal);
        counts.maternal        += usize::from(maternal);
        counts.masked_paternal += usize::from(paternal && called);
        counts.masked_maternal += usize::from(maternal && called);
    }
    counts
}

/// Count discordances, letting founders be compared in either orientation.
///
/// When `can_swap` is set, the result is also compared with its strands exchanged, and the orientation yielding the
/// lowest total is kept. Ties keep the swapped orientation. The phase of a founder cannot be inferred from its ancestry,
/// hence `can_swap` should only be set for founders.
#[must_use]
pub fn count_phase_aware_errors(genotypes: &[Genotype], original: &HaplotypePair, result: &HaplotypePair, can_swap: bool) -> (ErrorCounts, Orientation) {
    let as_is = count_errors(genotypes, original, result);
    if !can_swap {
        return (as_is, Orientation::AsIs)
    }

    let swapped = count_errors(genotypes, original, &result.swapped());
    match as_is.total() < swapped.total() {
        true  => (as_is, Orientation::AsIs),
        false => (swapped, Orientation::Swapped),
    }
}
