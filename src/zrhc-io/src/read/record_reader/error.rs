use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordReaderError {
    #[error("Failed to open {0}")]
    OpenFile(String, #[source] std::io::Error),

    #[error("Encountered IO error when reading line n°{lineno}: {source}")]
    IoError{source: std::io::Error, lineno: usize},

    #[error("Failed to parse a valid record at line n°{0}")]
    InvalidRecord(usize),
}
