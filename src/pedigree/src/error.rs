use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Individual '{0}' is defined multiple times within the pedigree")]
    DuplicateIndividual(String),

    #[error("Individual '{id}' has a single recorded parent (father: '{father}', mother: '{mother}'). Either both or none of the parents must be set")]
    HalfFounder{id: String, father: String, mother: String},

    #[error("The {role} '{parent}' of individual '{id}' cannot be found within the pedigree")]
    MissingParent{id: String, parent: String, role: &'static str},

    #[error("Failed to resolve the parents of individuals {0:?}: the pedigree contains a cycle")]
    Cycle(Vec<String>),
}
