use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to write output: inner writer returned an IO error")]
    IOError(#[from] std::io::Error)
}
