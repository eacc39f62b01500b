mod allele;
pub use allele::{Allele, ParseAlleleError};

mod genotype;
pub use genotype::{Genotype, ParseGenotypeError};

pub mod haplotype;
pub use haplotype::{HaplotypePair, Strand, StrandOrigin, TransmissionSource};

mod sex;
pub use sex::{ParseSexError, Sex};
