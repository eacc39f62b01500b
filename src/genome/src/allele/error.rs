use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse '{0}' into a valid allele. Expected '1' or '2'")]
pub struct ParseAlleleError(pub String);
