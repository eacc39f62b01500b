use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse '{0}' into a valid gender. Expected '1' (male), '2' (female) or '0' (unspecified)")]
pub struct ParseSexError(pub String);
