use thiserror::Error;

#[derive(Debug, Error)]
pub enum PedigreeReaderError {
    #[error("Failed to open pedigree definition source: {0}")]
    OpenFile(#[source] std::io::Error),

    #[error("Encountered IO error when reading line n°{lineno} of the pedigree definition: {source}")]
    IoError{source: std::io::Error, lineno: usize},

    #[error("Invalid number of fields at line n°{lineno} of the pedigree definition. Expected 5 or 6 ('family id father mother gender [phenotype]'), got {got}")]
    InvalidFieldNumber{got: usize, lineno: usize},

    #[error("Invalid gender tag at line n°{lineno} of the pedigree definition: {source}")]
    InvalidGender{source: genome::ParseSexError, lineno: usize},

    #[error("Failed to add individual '{0}' while parsing line n°{1} of the pedigree definition")]
    AddIndividual(String, usize),
}
