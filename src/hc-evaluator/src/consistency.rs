use ahash::AHashSet;
use itertools::Itertools;
use log::{debug, info};
use pedigree::Dataset;

use located_error::prelude::*;

use crate::{dataset::{ORIGINAL, RESULT}, error::ConsistencyError};

/// Identifiers found in `left` but not in `right`, sorted for diagnostics.
fn difference(left: &AHashSet<&str>, right: &AHashSet<&str>) -> Vec<String> {
    left.difference(right).map(ToString::to_string).sorted().collect()
}

/// Ensure two identifier sets are equal.
fn same_identifiers<'a>(left: (&'static str, &AHashSet<&'a str>), right: (&'static str, &AHashSet<&'a str>)) -> Result<(), ConsistencyError> {
    let (left, left_ids)   = left;
    let (right, right_ids) = right;
    if left_ids == right_ids {
        return Ok(())
    }
    Err(ConsistencyError::IdentifierMismatch {
        left,
        right,
        only_left : difference(left_ids, right_ids),
        only_right: difference(right_ids, left_ids),
    })
}

/// Structural consistency of a generated and a computed haplotype configuration:
/// - Both pedigrees are valid: every parent is a member, no offspring is a half-founder, and there is no cycle.
/// - The original pedigree, the result pedigree and the original genotype records refer to the same individuals.
/// - Every individual claims the same father, mother and gender in both pedigrees.
/// - Every individual spans the same number of loci in both configurations and in its genotype record.
///
/// The verdict does not depend on the order of `original` and `result`.
///
/// # Errors
/// - `ConsistencyError::InvalidPedigree` if either pedigree cannot be sorted parents-first.
/// - `ConsistencyError::IdentifierMismatch`, `ConsistencyError::LineageMismatch` or
///   `ConsistencyError::LocusCountMismatch` on the first violation.
pub fn check_structure(original: &Dataset, result: &Dataset) -> Result<()> {
    use ConsistencyError::{InvalidPedigree, LineageMismatch, LocusCountMismatch};
    info!("Checking (basic) consistency...");

    for (dataset, configuration) in [(original, ORIGINAL), (result, RESULT)] {
        dataset.pedigree.topological_order()
            .with_loc(|| InvalidPedigree(configuration))?;
    }

    let original_ids: AHashSet<&str> = original.pedigree.ids().collect();
    let result_ids  : AHashSet<&str> = result.pedigree.ids().collect();
    let genotype_ids: AHashSet<&str> = original.genotypes.keys().map(String::as_str).collect();
    same_identifiers((ORIGINAL, &original_ids), (RESULT, &result_ids))
        .and_then(|()| same_identifiers((ORIGINAL, &original_ids), ("genotyped pedigree", &genotype_ids)))
        .loc("While comparing pedigree members")?;

    for ind in original.pedigree.iter() {
        let Some(other) = result.pedigree.get(&ind.id) else {
            continue
        };
        if !ind.same_lineage(other) {
            return Err(anyhow!(LineageMismatch { id: ind.id.clone(), original: ind.lineage(), result: other.lineage() }))
                .loc("While comparing pedigree structures")
        }

        let count = |dataset: &Dataset| dataset.haplotypes_of(&ind.id).map_or(0, |pair| pair.len());
        let (original_len, result_len) = (count(original), count(result));
        let genotypes_len = original.genotypes_of(&ind.id).map_or(0, <[_]>::len);
        if original_len != result_len || original_len != genotypes_len {
            return Err(anyhow!(LocusCountMismatch { id: ind.id.clone(), original: original_len, result: result_len, genotypes: genotypes_len }))
                .loc("While comparing genotype lengths")
        }
    }
    Ok(())
}

/// Ensure every strand of `dataset` has been inherited, whole, from the corresponding parent.
/// Stops at the first violation.
///
/// # Errors
/// - `ConsistencyError::MissingParent` if a referenced parent has no haplotypes within `dataset`.
/// - `ConsistencyError::NotInherited` if a strand matches neither strand of its parent.
pub fn check_inheritance(dataset: &Dataset, configuration: &'static str) -> Result<()> {
    use ConsistencyError::{MissingParent, NotInherited};
    info!("Checking the inheritance of the {configuration} haplotype configuration...");
    for ind in dataset.pedigree.iter() {
        let Some(pair) = dataset.haplotypes_of(&ind.id) else {
            continue
        };

        let parents = [
            (ind.father(), pair.paternal(), "paternal", "father"),
            (ind.mother(), pair.maternal(), "maternal", "mother"),
        ];
        for (parent, strand, strand_label, role) in parents {
            let Some(parent) = parent else {
                continue
            };
            let parent_pair = dataset.haplotypes_of(parent)
                .with_loc(|| MissingParent { id: ind.id.clone(), parent: parent.to_string(), role, configuration })?;
            if !parent_pair.transmits(strand) {
                return Err(anyhow!(NotInherited { id: ind.id.clone(), parent: parent.to_string(), strand: strand_label, role, configuration }))
                    .loc("While checking haplotype inheritance")
            }
        }
        debug!("Haplotypes of individual {} were inherited from its parents", ind.id);
    }
    Ok(())
}
