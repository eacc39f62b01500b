use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::trace;
use located_error::prelude::*;

use crate::record::{GenotypeRecord, HaplotypeRecord, PhasedRecord, COMMENT_PREFIX};

mod error;
pub use error::RecordReaderError;

/// Contents of a genotyped pedigree file, as produced by the generator.
/// - `genotypes` : one genotype record per non-comment line.
/// - `haplotypes`: one ground-truth record per `# GENERATED_HAPLOTYPES` line.
#[derive(Debug, Clone, Default)]
pub struct GenotypedFile {
    pub genotypes : Vec<GenotypeRecord>,
    pub haplotypes: Vec<PhasedRecord>,
}

/// Line-oriented, tab-separated record reader.
/// - Empty lines are skipped.
/// - Lines starting with `#` are comments, unless they carry the `# GENERATED_HAPLOTYPES` prefix.
pub struct RecordReader<R: BufRead> {
    source: R,
}

impl RecordReader<BufReader<File>> {
    /// # Errors
    /// - `RecordReaderError::OpenFile` if `path` cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|err| RecordReaderError::OpenFile(path.display().to_string(), err))
            .loc("While creating record reader")?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Iterate over `(line number, line)`, skipping empty lines.
    fn lines(self) -> impl Iterator<Item = Result<(usize, String)>> {
        self.source.lines().enumerate()
            .map(|(i, line)| {
                let lineno = i + 1;
                line.map(|line| (lineno, line))
                    .map_err(|source| RecordReaderError::IoError { source, lineno })
                    .loc("While reading records")
            })
            .filter(|line| !matches!(line, Ok((_, content)) if content.trim().is_empty()))
    }

    /// Read a genotyped pedigree file, holding ground-truth haplotype comments and genotype records.
    ///
    /// # Errors
    /// - `RecordReaderError::InvalidRecord` if any of the records fails to parse.
    pub fn read_genotyped(self) -> Result<GenotypedFile> {
        let mut file = GenotypedFile::default();
        for line in self.lines() {
            let (lineno, line) = line?;
            if HaplotypeRecord::matches(&line) {
                trace!("line {lineno}: haplotype record");
                let record = line.parse::<HaplotypeRecord>().with_loc(|| RecordReaderError::InvalidRecord(lineno))?;
                file.haplotypes.push(record.into_inner());
            } else if !line.starts_with(COMMENT_PREFIX) {
                trace!("line {lineno}: genotype record");
                file.genotypes.push(line.parse::<GenotypeRecord>().with_loc(|| RecordReaderError::InvalidRecord(lineno))?);
            }
        }
        Ok(file)
    }

    /// Read a file of phased records, such as a solver's haplotype configuration. Comment lines are ignored.
    ///
    /// # Errors
    /// - `RecordReaderError::InvalidRecord` if any of the records fails to parse.
    pub fn read_phased(self) -> Result<Vec<PhasedRecord>> {
        let mut records = Vec::new();
        for line in self.lines() {
            let (lineno, line) = line?;
            if line.starts_with(COMMENT_PREFIX) {
                continue
            }
            records.push(line.parse::<PhasedRecord>().with_loc(|| RecordReaderError::InvalidRecord(lineno))?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genome::Genotype;

    const ORIGINAL: &str = "\
# GENERATED_HAPLOTYPES\t0\t1\t0\t0\t1\tphenotype\t1|2
# GENERATED_HAPLOTYPES\t0\t2\t0\t0\t2\tphenotype\t1|1
# GENERATED_HAPLOTYPES\t0\t3\t1\t2\t0\tphenotype\t2|1
# A free-form comment
0\t1\t0\t0\t1\tphenotype\t1 2

0\t2\t0\t0\t2\tphenotype\t1 1
0\t3\t1\t2\t0\tphenotype\t0 0
";

    #[test]
    fn read_genotyped() -> Result<()> {
        let file = RecordReader::new(ORIGINAL.as_bytes()).read_genotyped()?;
        assert_eq!(file.haplotypes.len(), 3);
        assert_eq!(file.genotypes.len(), 3);
        assert_eq!(file.haplotypes[2].haplotypes.to_string(), "2|1");
        assert_eq!(file.genotypes[2].genotypes, vec![Genotype::Missing]);
        Ok(())
    }

    #[test]
    fn read_phased_skips_comments() -> Result<()> {
        let result = "# solver output\n0\t1\t0\t0\t1\tphenotype\t2|1\n0\t2\t0\t0\t2\tphenotype\t1|1\n";
        let records = RecordReader::new(result.as_bytes()).read_phased()?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].individual.id, "1");
        Ok(())
    }

    #[test]
    fn invalid_record_reports_line_number() {
        let result = "0\t1\t0\t0\t1\tphenotype\t2|1\n0\t2\t0\t0\t2\tphenotype\t1 1\n";
        let err = RecordReader::new(result.as_bytes()).read_phased().expect_err("Genotypes are not phased haplotypes");
        assert!(err.to_string().contains("line n°2"), "{err}");
    }
}
