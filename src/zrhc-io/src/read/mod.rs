mod pedigree_reader;
pub use pedigree_reader::{PedigreeReader, PedigreeReaderError};

mod record_reader;
pub use record_reader::{RecordReader, RecordReaderError, GenotypedFile};
