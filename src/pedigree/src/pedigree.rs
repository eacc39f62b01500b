use std::collections::VecDeque;

use ahash::AHashMap;
use indexmap::IndexMap;
use log::trace;

use crate::{Individual, PedigreeError};

/// A pedigree: the set of individuals linked through their parent -> offspring relationships.
/// # Fields:
/// - `individuals`: insertion-ordered map of all members of the pedigree (founders and offspring)
///                  - Key  : (String)     - identifier of the individual
///                  - Value: (Individual) - the individual
///
/// Parent references are resolved lazily: individuals may be inserted in any order, and
/// `validate()` / `topological_order()` are responsible for checking the structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pedigree {
    individuals: IndexMap<String, Individual>,
}

impl Pedigree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include a new individual within this pedigree.
    ///
    /// # Errors
    /// - `PedigreeError::DuplicateIndividual` if the identifier is already taken.
    pub fn add_individual(&mut self, individual: Individual) -> Result<(), PedigreeError> {
        if self.individuals.contains_key(&individual.id) {
            return Err(PedigreeError::DuplicateIndividual(individual.id))
        }
        self.individuals.insert(individual.id.clone(), individual);
        Ok(())
    }

    /// Build a pedigree out of a set of individuals.
    ///
    /// # Errors
    /// - `PedigreeError::DuplicateIndividual` if two individuals share the same identifier.
    pub fn from_individuals<I>(individuals: I) -> Result<Self, PedigreeError>
    where I: IntoIterator<Item = Individual>
    {
        let mut pedigree = Self::new();
        for ind in individuals {
            pedigree.add_individual(ind)?;
        }
        Ok(pedigree)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.individuals.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterate over all individuals, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    /// Iterate over all identifiers, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.individuals.keys().map(String::as_str)
    }

    pub fn founders(&self) -> impl Iterator<Item = &Individual> {
        self.iter().filter(|ind| ind.is_founder())
    }

    pub fn offsprings(&self) -> impl Iterator<Item = &Individual> {
        self.iter().filter(|ind| !ind.is_founder())
    }

    /// Ensure every offspring carries two parents, and that these parents are members of this pedigree.
    ///
    /// # Errors
    /// - `PedigreeError::HalfFounder` if an individual has a single known parent.
    /// - `PedigreeError::MissingParent` if a parent cannot be found within the pedigree.
    pub fn validate(&self) -> Result<(), PedigreeError> {
        for ind in self.offsprings() {
            let (Some(father), Some(mother)) = (ind.father(), ind.mother()) else {
                return Err(PedigreeError::HalfFounder {
                    id    : ind.id.clone(),
                    father: ind.father().unwrap_or(crate::NO_PARENT).to_string(),
                    mother: ind.mother().unwrap_or(crate::NO_PARENT).to_string(),
                })
            };

            for (parent, role) in [(father, "father"), (mother, "mother")] {
                if !self.contains(parent) {
                    return Err(PedigreeError::MissingParent { id: ind.id.clone(), parent: parent.to_string(), role })
                }
            }
        }
        Ok(())
    }

    /// Order individuals such that parents always come before their offspring (Kahn's algorithm).
    ///
    /// # Behavior
    /// - The work queue is seeded with founders, in insertion order.
    /// - Offspring are released in insertion order, as soon as both of their parents have been processed.
    /// - The output order is thus fully deterministic for a given pedigree.
    ///
    /// # Errors
    /// - any error raised by `validate()`
    /// - `PedigreeError::Cycle` if some individuals can never be resolved.
    pub fn topological_order(&self) -> Result<Vec<&Individual>, PedigreeError> {
        self.validate()?;

        // ---- Count the number of unresolved parent slots of each individual, and index offspring by parent.
        let mut unresolved: AHashMap<&str, usize> = AHashMap::with_capacity(self.len());
        let mut offspring : AHashMap<&str, Vec<&Individual>> = AHashMap::new();
        for ind in self.iter() {
            unresolved.insert(&ind.id, ind.parents().count());
            for parent in ind.parents() {
                offspring.entry(parent).or_default().push(ind);
            }
        }

        let mut queue: VecDeque<&Individual> = self.founders().collect();
        let mut order = Vec::with_capacity(self.len());
        while let Some(ind) = queue.pop_front() {
            trace!("Resolved individual {}", ind.id);
            order.push(ind);
            for child in offspring.get(ind.id.as_str()).into_iter().flatten().copied() {
                if let Some(count) = unresolved.get_mut(child.id.as_str()) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(child);
                    }
                }
            }
        }

        // ---- Any leftover individual lies within a cycle, or descends from one.
        if order.len() != self.len() {
            let leftovers = self.iter()
                .filter(|ind| unresolved.get(ind.id.as_str()).is_some_and(|count| *count > 0))
                .map(|ind| ind.id.clone())
                .collect();
            return Err(PedigreeError::Cycle(leftovers))
        }
        Ok(order)
    }
}
