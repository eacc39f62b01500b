use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expected at least {expected} tab-separated fields. Got {got}")]
    MissingFields{expected: usize, got: usize},

    #[error(transparent)]
    InvalidGender(#[from] genome::ParseSexError),

    #[error("Invalid genotype at locus n°{0}")]
    InvalidGenotype(usize),

    #[error("Invalid phased haplotypes")]
    InvalidHaplotypes,

    #[error("Not a haplotype record: line does not start with '{0}'")]
    MissingPrefix(&'static str),
}
