use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HaplotypeError {
    #[error("Paternal and maternal strands differ in length: {paternal} != {maternal}")]
    LengthMismatch{paternal: usize, maternal: usize},

    #[error("Invalid phased locus '{0}'. Expected '<paternal>|<maternal>'")]
    InvalidLocus(String),
}
