use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse '{0}' into a valid genotype. Expected one of '0 0', '1 1', '2 2', '1 2' or '2 1'")]
pub struct ParseGenotypeError(pub String);
