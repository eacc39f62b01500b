mod individual;
pub use individual::{Individual, NO_PARENT, DEFAULT_PHENOTYPE};

mod pedigree;
pub use crate::pedigree::Pedigree;

mod dataset;
pub use dataset::Dataset;

mod error;
pub use error::PedigreeError;
