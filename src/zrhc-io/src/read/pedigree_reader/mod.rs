use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use genome::Sex;
use log::debug;
use pedigree::{Individual, Pedigree, NO_PARENT, DEFAULT_PHENOTYPE};
use located_error::prelude::*;

mod error;
pub use error::PedigreeReaderError;

/// Input pedigree structure reader.
/// ### File characteristics:
/// - Whitespace-separated fields
/// - Columns: <family> <id> <father> <mother> <gender> [<phenotype>]
/// - Lines starting with '#' and empty lines are skipped.
/// - Unknown parents are denoted with `0`
pub struct PedigreeReader;

impl PedigreeReader {
    /// Parse a pedigree definition file.
    ///
    /// # Errors
    /// - if `path` cannot be opened, or any of its lines is invalid.
    pub fn from_path(path: &Path) -> Result<Pedigree> {
        let file = File::open(path).map_err(PedigreeReaderError::OpenFile)
            .with_loc(|| format!("While attempting to parse {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_loc(|| format!("While attempting to parse {}", path.display()))
    }

    /// Parse a pedigree definition from any buffered source (e.g. stdin)
    ///
    /// # Errors
    /// - `PedigreeReaderError::IoError` if a line cannot be read
    /// - `PedigreeReaderError::InvalidFieldNumber` if a line does not hold 5 or 6 columns
    /// - `PedigreeReaderError::AddIndividual` if an identifier is defined twice.
    pub fn from_reader<R: BufRead>(source: R) -> Result<Pedigree> {
        use PedigreeReaderError::{IoError, AddIndividual};
        let mut pedigree = Pedigree::new();
        for (i, line) in source.lines().enumerate() {
            let lineno = i + 1;
            let line = line.map_err(|source| IoError { source, lineno }).loc("While reading pedigree")?;
            let Some(individual) = Self::parse_line(&line, lineno).loc("While reading pedigree")? else {
                continue
            };

            debug!("Read individual {:>4}.  Father= {:>4}  Mother= {:>4}  Gender= {}",
                individual.id,
                individual.father().unwrap_or(NO_PARENT),
                individual.mother().unwrap_or(NO_PARENT),
                individual.sex.label()
            );
            let id = individual.id.clone();
            pedigree.add_individual(individual).with_loc(|| AddIndividual(id, lineno))?;
        }
        Ok(pedigree)
    }

    /// Parse a single line of the pedigree definition. Returns `None` if the line is a comment or empty.
    fn parse_line(line: &str, lineno: usize) -> Result<Option<Individual>, PedigreeReaderError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None)
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let (family, id, father, mother, gender, phenotype) = match fields[..] {
            [family, id, father, mother, gender]            => (family, id, father, mother, gender, DEFAULT_PHENOTYPE),
            [family, id, father, mother, gender, phenotype] => (family, id, father, mother, gender, phenotype),
            _ => return Err(PedigreeReaderError::InvalidFieldNumber { got: fields.len(), lineno }),
        };

        let sex = gender.parse::<Sex>().map_err(|source| PedigreeReaderError::InvalidGender { source, lineno })?;
        let individual = Individual::new(id, Some(father), Some(mother), sex)
            .with_family(family)
            .with_phenotype(phenotype);
        Ok(Some(individual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRIO: &str = "# family id father mother gender\n\
                        0 1 0 0 1\n\
                        0 2 0 0 2\n\
                        \n\
                        0 3 1 2 2 affected\n";

    #[test]
    fn parse_trio() -> Result<()> {
        let pedigree = PedigreeReader::from_reader(TRIO.as_bytes())?;
        assert_eq!(pedigree.len(), 3);
        assert_eq!(pedigree.ids().collect::<Vec<_>>(), vec!["1", "2", "3"]);

        let child = pedigree.get("3").expect("Child should be present");
        assert_eq!(child.father(), Some("1"));
        assert_eq!(child.mother(), Some("2"));
        assert_eq!(child.sex, Sex::Female);
        assert_eq!(child.phenotype, "affected");

        let father = pedigree.get("1").expect("Father should be present");
        assert!(father.is_founder());
        assert_eq!(father.sex, Sex::Male);
        assert_eq!(father.phenotype, DEFAULT_PHENOTYPE);
        Ok(())
    }

    #[test]
    fn invalid_field_number() {
        let err = PedigreeReader::from_reader("0 1 0 0\n".as_bytes()).expect_err("Four columns should be rejected");
        let root = err.root_cause().to_string();
        assert!(root.contains("line n°1"), "{root}");
    }

    #[test]
    fn invalid_gender() {
        let err = PedigreeReader::from_reader("0 1 0 0 1\n0 2 0 0 -9\n".as_bytes()).expect_err("Unknown gender tag");
        let root = err.root_cause().to_string();
        assert!(root.contains("'-9'"), "{root}");
        assert!(format!("{err:?}").contains("line n°2"), "{err:?}");
    }

    #[test]
    fn duplicate_individual() {
        assert!(PedigreeReader::from_reader("0 1 0 0 1\n0 1 0 0 2\n".as_bytes()).is_err());
    }

    #[test]
    fn from_path() -> Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path = tmpdir.path().join("trio.ped");
        File::create(&path)?.write_all(TRIO.as_bytes())?;
        assert_eq!(PedigreeReader::from_path(&path)?.len(), 3);
        assert!(PedigreeReader::from_path(&tmpdir.path().join("missing.ped")).is_err());
        Ok(())
    }
}
