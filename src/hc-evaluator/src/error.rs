use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Individual '{0}' is described by multiple haplotype records")]
    DuplicateHaplotypes(String),

    #[error("Individual '{0}' is described by multiple genotype records")]
    DuplicateGenotypes(String),

    #[error("Failed to load the {0} haplotype configuration")]
    Load(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("The {0} pedigree is invalid")]
    InvalidPedigree(&'static str),

    #[error("The {left} and the {right} refer to different individuals. Only in the {left}: [{}] - Only in the {right}: [{}]",
        .only_left.join(", "), .only_right.join(", ")
    )]
    IdentifierMismatch{left: &'static str, right: &'static str, only_left: Vec<String>, only_right: Vec<String>},

    #[error("The parents of '{id}' are different in the two pedigrees. Original: ({original}) - Result: ({result})")]
    LineageMismatch{id: String, original: String, result: String},

    #[error("The genotype lengths of '{id}' differ. Original haplotypes: {original} - Result haplotypes: {result} - Genotypes: {genotypes}")]
    LocusCountMismatch{id: String, original: usize, result: usize, genotypes: usize},

    #[error("Individual '{id}' refers to {role} '{parent}', which is absent from the {configuration} haplotype configuration")]
    MissingParent{id: String, parent: String, role: &'static str, configuration: &'static str},

    #[error("The {strand} haplotype of individual '{id}' has not been inherited from {role} '{parent}' in the {configuration} haplotype configuration")]
    NotInherited{id: String, parent: String, strand: &'static str, role: &'static str, configuration: &'static str},
}
