use std::{fmt::{self, Display, Formatter}, ops::AddAssign};

use genome::Genotype;
use itertools::Itertools;
use parser::RateConvention;
use zrhc_io::write::WRITER_SEPARATOR;

use crate::discordance::{ErrorCounts, Orientation};

/// Column names of the per-individual report.
pub const INDIVIDUAL_HEADER: [&str; 14] = [
    "input file", "result file",
    "individual id",
    "father id", "mother id",
    "genotype_length",
    "heterozygous", "homozygous", "missing",
    "genotype errors",
    "paternal haplotype errors", "maternal haplotype errors",
    "paternal haplotype errors wo missing", "maternal haplotype errors wo missing",
];

/// Column names of the pedigree-wide summary.
pub const SUMMARY_HEADER: [&str; 17] = [
    "input file",
    "result file",
    "pedigree size",
    "tot genotype length",
    "tot heterozygous loci",
    "tot homozygous loci",
    "tot missing genotypes",
    "tot genotype errors",
    "tot paternal haplotype errors",
    "tot maternal haplotype errors",
    "tot paternal haplotype errors wo missing",
    "tot maternal haplotype errors wo missing",
    "avg genotype errors",
    "avg paternal haplotype errors",
    "avg maternal haplotype errors",
    "avg paternal haplotype errors wo missing",
    "avg maternal haplotype errors wo missing",
];

fn header<const N: usize>(names: [&str; N]) -> String {
    names.iter().map(|name| format!("\"{name}\"")).join(WRITER_SEPARATOR)
}

/// Genotype composition of an individual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocusCounts {
    pub length      : usize,
    pub heterozygous: usize,
    pub homozygous  : usize,
    pub missing     : usize,
}

impl LocusCounts {
    #[must_use]
    pub fn from_genotypes(genotypes: &[Genotype]) -> Self {
        Self {
            length      : genotypes.len(),
            heterozygous: genotypes.iter().filter(|g| g.is_heterozygous()).count(),
            homozygous  : genotypes.iter().filter(|g| g.is_homozygous()).count(),
            missing     : genotypes.iter().filter(|g| g.is_missing()).count(),
        }
    }
}

impl AddAssign for LocusCounts {
    fn add_assign(&mut self, other: Self) {
        self.length       += other.length;
        self.heterozygous += other.heterozygous;
        self.homozygous   += other.homozygous;
        self.missing      += other.missing;
    }
}

impl Display for LocusCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.length, self.heterozygous, self.homozygous, self.missing)
    }
}

/// Relative discordance of an individual, or its average across a pedigree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ErrorRates {
    pub genotype       : f64,
    pub paternal       : f64,
    pub maternal       : f64,
    pub masked_paternal: f64,
    pub masked_maternal: f64,
}

/// `numerator / denominator`, or 0 if the denominator is null.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    match denominator {
        0 => 0.0,
        _ => numerator as f64 / denominator as f64,
    }
}

impl ErrorRates {
    /// - genotype errors are relative to the number of missing loci.
    /// - haplotype errors are relative to the number of heterozygous and missing loci.
    /// - haplotype errors at called loci are relative to the number of heterozygous loci.
    ///
    /// Using `RateConvention::Legacy`, maternal rates are computed from the paternal errors.
    #[must_use]
    pub fn new(loci: &LocusCounts, errors: &ErrorCounts, convention: RateConvention) -> Self {
        let (maternal, masked_maternal) = match convention {
            RateConvention::Corrected => (errors.maternal, errors.masked_maternal),
            RateConvention::Legacy    => (errors.paternal, errors.masked_paternal),
        };
        let ambiguous = loci.heterozygous + loci.missing;
        Self {
            genotype       : ratio(errors.genotype, loci.missing),
            paternal       : ratio(errors.paternal, ambiguous),
            maternal       : ratio(maternal, ambiguous),
            masked_paternal: ratio(errors.masked_paternal, loci.heterozygous),
            masked_maternal: ratio(masked_maternal, loci.heterozygous),
        }
    }
}

impl AddAssign for ErrorRates {
    fn add_assign(&mut self, other: Self) {
        self.genotype        += other.genotype;
        self.paternal        += other.paternal;
        self.maternal        += other.maternal;
        self.masked_paternal += other.masked_paternal;
        self.masked_maternal += other.masked_maternal;
    }
}

impl Display for ErrorRates {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}\t{}", self.genotype, self.paternal, self.maternal, self.masked_paternal, self.masked_maternal)
    }
}

/// Evaluation of a single individual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualStats {
    pub id         : String,
    pub father     : String,
    pub mother     : String,
    pub loci       : LocusCounts,
    pub errors     : ErrorCounts,
    pub orientation: Orientation,
}

/// Per-individual statistics of an evaluation, and their pedigree-wide aggregation.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    original   : String,
    result     : String,
    convention : RateConvention,
    individuals: Vec<IndividualStats>,
}

impl EvaluationReport {
    #[must_use]
    pub fn new(original: &str, result: &str, convention: RateConvention) -> Self {
        Self { original: original.to_string(), result: result.to_string(), convention, individuals: Vec::new() }
    }

    pub fn push(&mut self, stats: IndividualStats) {
        self.individuals.push(stats);
    }

    #[must_use]
    pub fn individuals(&self) -> &[IndividualStats] {
        &self.individuals
    }

    #[must_use]
    pub fn pedigree_size(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn total_loci(&self) -> LocusCounts {
        let mut total = LocusCounts::default();
        self.individuals.iter().for_each(|ind| total += ind.loci);
        total
    }

    #[must_use]
    pub fn total_errors(&self) -> ErrorCounts {
        let mut total = ErrorCounts::default();
        self.individuals.iter().for_each(|ind| total += ind.errors);
        total
    }

    /// Mean of the per-individual error rates, over every member of the pedigree. 0 for an empty pedigree.
    #[must_use]
    pub fn average_rates(&self) -> ErrorRates {
        let mut sum = ErrorRates::default();
        for ind in &self.individuals {
            sum += ErrorRates::new(&ind.loci, &ind.errors, self.convention);
        }
        if self.individuals.is_empty() {
            return sum
        }
        let n = self.pedigree_size() as f64;
        ErrorRates {
            genotype       : sum.genotype / n,
            paternal       : sum.paternal / n,
            maternal       : sum.maternal / n,
            masked_paternal: sum.masked_paternal / n,
            masked_maternal: sum.masked_maternal / n,
        }
    }

    /// Render the report as tab-separated lines.
    /// - `full_stats == true`: one line per individual.
    /// - `full_stats == false`: a single, pedigree-wide summary line.
    #[must_use]
    pub fn lines(&self, full_stats: bool, show_header: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.individuals.len() + 1);
        if full_stats {
            if show_header {
                lines.push(header(INDIVIDUAL_HEADER));
            }
            for ind in &self.individuals {
                lines.push([
                    &self.original, &self.result, &ind.id, &ind.father, &ind.mother,
                    &ind.loci.to_string(), &ind.errors.to_string()
                ].iter().join(WRITER_SEPARATOR));
            }
        } else {
            if show_header {
                lines.push(header(SUMMARY_HEADER));
            }
            lines.push([
                &self.original, &self.result, &self.pedigree_size().to_string(),
                &self.total_loci().to_string(), &self.total_errors().to_string(), &self.average_rates().to_string()
            ].iter().join(WRITER_SEPARATOR));
        }
        lines
    }
}
