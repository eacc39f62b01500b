use std::{fs::File, io::{Write, BufWriter}, path::Path};
use anyhow::Result;

use located_error::LocatedError;

pub mod error;
pub use error::WriterError;

/// Field separator of every record written by this crate.
pub const WRITER_SEPARATOR: &str = "\t";

/// A generic line writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> GenericWriter<'a> {
    /// Instantiate a new `GenericWriter`, linked to a file, or to stdout if `path` is `None`.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<GenericWriter<'a>> {
        use WriterError::IOError;
        Ok(GenericWriter{ source: match path {
            Some(path) => {
                let file = File::create(path).map_err(IOError).loc("While creating file")?;
                BufWriter::new(Box::new(file))
            },
            None => {
                BufWriter::new(Box::new(std::io::stdout()))
            }
        }})
    }

    /// Wrap any writer (e.g. an in-memory buffer).
    pub fn from_writer(writer: impl Write + 'a) -> GenericWriter<'a> {
        GenericWriter { source: BufWriter::new(Box::new(writer)) }
    }

    /// Write the contents of a generic iterator. One iteration step = one line.
    /// The underlying buffer is flushed once every item has been written.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        iter.into_iter()
            .try_for_each(|obj| writeln!(self.source, "{obj}"))
            .map_err(WriterError::IOError)
            .loc("While writing contents")?;

        self.flush()
    }

    /// # Errors
    /// - If the buffered contents cannot be written out.
    pub fn flush(&mut self) -> Result<()> {
        self.source.flush().map_err(WriterError::IOError).loc("While flushing buffer contents of Writer")
    }
}
