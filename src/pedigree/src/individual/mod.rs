use std::fmt::{self, Display, Formatter};

use genome::Sex;

/// Parent identifier sentinel, denoting an unknown parent (i.e. the individual is a founder)
pub const NO_PARENT: &str = "0";

/// Placeholder written in the phenotype column when none was provided.
pub const DEFAULT_PHENOTYPE: &str = "phenotype";

/// A pedigree member.
/// # Fields:
/// - `id`       : unique identifier of the individual within its pedigree (e.g. "3")
/// - `family`   : family identifier, carried through records.
/// - `father`   : identifier of the father. `None` if unknown.
/// - `mother`   : identifier of the mother. `None` if unknown.
/// - `sex`      : gender tag.
/// - `phenotype`: free-form phenotype column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub id       : String,
    pub family   : String,
    father       : Option<String>,
    mother       : Option<String>,
    pub sex      : Sex,
    pub phenotype: String,
}

impl Individual {
    /// Instantiate a new individual. Parent identifiers equal to `NO_PARENT` are treated as unknown.
    #[must_use]
    pub fn new(id: &str, father: Option<&str>, mother: Option<&str>, sex: Sex) -> Self {
        Self {
            id       : id.to_string(),
            family   : String::from("0"),
            father   : Self::parse_parent(father),
            mother   : Self::parse_parent(mother),
            sex,
            phenotype: DEFAULT_PHENOTYPE.to_string(),
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }

    #[must_use]
    pub fn with_phenotype(mut self, phenotype: &str) -> Self {
        self.phenotype = phenotype.to_string();
        self
    }

    fn parse_parent(parent: Option<&str>) -> Option<String> {
        parent.filter(|id| *id != NO_PARENT).map(ToString::to_string)
    }

    #[must_use]
    pub fn father(&self) -> Option<&str> {
        self.father.as_deref()
    }

    #[must_use]
    pub fn mother(&self) -> Option<&str> {
        self.mother.as_deref()
    }

    /// Iterate over the recorded parents (father first).
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.father().into_iter().chain(self.mother())
    }

    /// An individual is a founder iff both of its parents are unknown.
    #[must_use]
    pub fn is_founder(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }

    /// Do `self` and `other` claim the same father, mother and gender ?
    #[must_use]
    pub fn same_lineage(&self, other: &Individual) -> bool {
        self.father == other.father && self.mother == other.mother && self.sex == other.sex
    }

    /// `(father, mother, gender)` triple using record encoding, for diagnostics.
    #[must_use]
    pub fn lineage(&self) -> String {
        format!("{},{},{}", self.father().unwrap_or(NO_PARENT), self.mother().unwrap_or(NO_PARENT), self.sex)
    }
}

/// First six columns of a pedigree record: `family id father mother gender phenotype`
impl Display for Individual {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}\t{}\t{}",
            self.family,
            self.id,
            self.father().unwrap_or(NO_PARENT),
            self.mother().unwrap_or(NO_PARENT),
            self.sex,
            self.phenotype
        )
    }
}
