use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Invalid missing genotype probability: {0}. Must lie within [0, 1]")]
    InvalidProbability(f64),

    #[error("Failed to sort the pedigree. Individuals cannot be processed parents-first")]
    UnsortablePedigree,

    #[error("No haplotypes were generated for individual '{0}'")]
    MissingHaplotypes(String),

    #[error("Failed to compute the haplotypes of individual '{0}'")]
    InvalidTransmission(String),
}
