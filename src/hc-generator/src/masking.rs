use genome::{Genotype, HaplotypePair};
use indexmap::IndexMap;
use log::{debug, info};

use located_error::prelude::*;

use crate::{error::GeneratorError, sampler::Sampler};

/// Ensure `probability` lies within [0, 1].
///
/// # Errors
/// - `GeneratorError::InvalidProbability` otherwise.
pub fn validate_probability(probability: f64) -> Result<(), GeneratorError> {
    match (0.0..=1.0).contains(&probability) {
        true  => Ok(()),
        false => Err(GeneratorError::InvalidProbability(probability)),
    }
}

/// Project each haplotype pair to its unordered genotypes, then independently mask every locus with
/// the given probability. Individuals are processed in the order of `haplotypes`, loci in ascending order.
///
/// # Errors
/// - `GeneratorError::InvalidProbability` if `probability` does not lie within [0, 1]. No draw is performed.
pub fn mask_genotypes(haplotypes: &IndexMap<String, HaplotypePair>, probability: f64, sampler: &mut dyn Sampler) -> Result<IndexMap<String, Vec<Genotype>>> {
    validate_probability(probability).loc("While masking genotypes")?;
    info!("Computing the corresponding genotypes...");

    let mut masked = 0;
    let genotypes = haplotypes.iter()
        .map(|(id, pair)| {
            let genotypes: Vec<Genotype> = pair.genotypes()
                .map(|genotype| if sampler.is_masked(probability) { Genotype::Missing } else { genotype })
                .collect();
            let missing = genotypes.iter().filter(|g| g.is_missing()).count();
            debug!("Masked {missing:>4} out of {:>4} genotypes of individual {id:>4}", genotypes.len());
            masked += missing;
            (id.clone(), genotypes)
        })
        .collect();
    info!("Masked genotypes: {masked}");
    Ok(genotypes)
}
