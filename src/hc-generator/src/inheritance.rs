use ahash::AHashMap;
use genome::{HaplotypePair, Strand, TransmissionSource};
use indexmap::IndexMap;
use log::{debug, info};
use pedigree::{Individual, Pedigree};

use located_error::prelude::*;

use crate::{error::GeneratorError, sampler::Sampler};

/// Draw `length` uniform alleles.
fn random_strand(length: usize, sampler: &mut dyn Sampler) -> Strand {
    (0..length).map(|_| sampler.allele()).collect()
}

/// Copy one whole strand of each parent into `offspring`, from a single pair of transmission bits.
fn transmit(offspring: &Individual, haplotypes: &AHashMap<&str, HaplotypePair>, sampler: &mut dyn Sampler) -> Result<HaplotypePair> {
    use GeneratorError::MissingHaplotypes;
    let (Some(father), Some(mother)) = (offspring.father(), offspring.mother()) else {
        return Err(anyhow!(MissingHaplotypes(offspring.id.clone()))).loc("While attempting to transmit founder haplotypes")
    };
    let father_haplotypes = haplotypes.get(father).with_loc(|| MissingHaplotypes(father.to_string()))?;
    let mother_haplotypes = haplotypes.get(mother).with_loc(|| MissingHaplotypes(mother.to_string()))?;

    let source = TransmissionSource { father: sampler.transmission(), mother: sampler.transmission() };
    debug!("Computing the haplotypes of individual {:>4}: paternal <- {:>4} ({}), maternal <- {:>4} ({})",
        offspring.id, father, source.father, mother, source.mother
    );
    Ok(HaplotypePair::inherit(father_haplotypes, mother_haplotypes, source))
}

/// Generate a zero-recombinant haplotype configuration for every member of `pedigree`.
///
/// 1. Founders, in pedigree order, receive `length` uniform paternal alleles, followed by `length` uniform maternal alleles.
/// 2. Offspring are then processed parents-first, and inherit one whole strand of each parent.
///
/// The pedigree is validated before any random draw. The returned configuration follows the pedigree order.
///
/// # Errors
/// - `GeneratorError::UnsortablePedigree` if the pedigree holds a half-founder, an unknown parent, or a cycle.
pub fn generate_haplotypes(pedigree: &Pedigree, length: usize, sampler: &mut dyn Sampler) -> Result<IndexMap<String, HaplotypePair>> {
    use GeneratorError::{InvalidTransmission, MissingHaplotypes, UnsortablePedigree};
    let order = pedigree.topological_order().with_loc(|| UnsortablePedigree)?;

    let mut haplotypes: AHashMap<&str, HaplotypePair> = AHashMap::with_capacity(pedigree.len());
    for founder in pedigree.founders() {
        debug!("Computing the haplotypes of founder {:>7}", founder.id);
        let paternal = random_strand(length, sampler);
        let maternal = random_strand(length, sampler);
        haplotypes.insert(&founder.id, HaplotypePair::new(paternal, maternal)?);
    }

    let offsprings: Vec<&Individual> = order.into_iter().filter(|ind| !ind.is_founder()).collect();
    info!("Not-haplotyped individuals: {:>4}", offsprings.len());
    for offspring in offsprings {
        let pair = transmit(offspring, &haplotypes, sampler).with_loc(|| InvalidTransmission(offspring.id.clone()))?;
        haplotypes.insert(&offspring.id, pair);
    }

    pedigree.ids()
        .map(|id| haplotypes.remove(id).map(|pair| (id.to_string(), pair)).with_loc(|| MissingHaplotypes(id.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::MockSampler;
    use genome::{Allele, Sex, StrandOrigin};

    fn trio() -> Pedigree {
        let mut pedigree = Pedigree::new();
        for ind in [
            Individual::new("1", None, None, Sex::Male),
            Individual::new("2", None, None, Sex::Female),
            Individual::new("3", Some("1"), Some("2"), Sex::Unspecified),
        ] {
            pedigree.add_individual(ind).expect("Trio should be valid");
        }
        pedigree
    }

    /// Three generations, listed children-first.
    fn three_generations() -> Pedigree {
        let mut pedigree = Pedigree::new();
        for (id, parents) in [
            ("g1", Some(("c1", "x"))),
            ("c1", Some(("a", "b"))),
            ("c2", Some(("a", "b"))),
            ("g2", Some(("c2", "c1"))),
            ("a", None),
            ("b", None),
            ("x", None),
        ] {
            let (father, mother) = parents.unzip();
            pedigree.add_individual(Individual::new(id, father, mother, Sex::Unspecified)).expect("Pedigree should be valid");
        }
        pedigree
    }

    fn scripted<T: Send + 'static>(values: Vec<T>) -> impl FnMut() -> T + Send + 'static {
        let mut values = values.into_iter();
        move || values.next().expect("Unexpected draw")
    }

    #[test]
    fn trio_inheritance() -> Result<()> {
        use Allele::{One, Two};
        let mut sampler = MockSampler::new();
        // founder 1: paternal [1], maternal [2] ; founder 2: paternal [1], maternal [1]
        sampler.expect_allele().times(4).returning(scripted(vec![One, Two, One, One]));
        // child: father's maternal strand, mother's paternal strand.
        sampler.expect_transmission().times(2).returning(scripted(vec![StrandOrigin::Maternal, StrandOrigin::Paternal]));

        let haplotypes = generate_haplotypes(&trio(), 1, &mut sampler)?;
        assert_eq!(haplotypes.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        assert_eq!(haplotypes["1"].to_string(), "1|2");
        assert_eq!(haplotypes["2"].to_string(), "1|1");
        assert_eq!(haplotypes["3"].to_string(), "2|1");
        Ok(())
    }

    #[test]
    fn founder_alleles_are_drawn_paternal_first() -> Result<()> {
        use Allele::{One, Two};
        let mut sampler = MockSampler::new();
        sampler.expect_allele().times(6).returning(scripted(vec![One, One, One, Two, Two, Two]));
        let pedigree = Pedigree::from_individuals([Individual::new("f", None, None, Sex::Male)])?;

        let haplotypes = generate_haplotypes(&pedigree, 3, &mut sampler)?;
        assert_eq!(haplotypes["f"].to_string(), "1|2\t1|2\t1|2");
        Ok(())
    }

    #[test]
    fn strand_provenance() -> Result<()> {
        let pedigree = three_generations();
        for seed in 0..20 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let haplotypes = generate_haplotypes(&pedigree, 50, &mut rng)?;
            assert_eq!(haplotypes.len(), pedigree.len());
            for ind in pedigree.offsprings() {
                let pair = &haplotypes[ind.id.as_str()];
                let father = ind.father().expect("Offspring should have a father");
                let mother = ind.mother().expect("Offspring should have a mother");
                assert!(haplotypes[father].transmits(pair.paternal()), "seed {seed}: {} - paternal", ind.id);
                assert!(haplotypes[mother].transmits(pair.maternal()), "seed {seed}: {} - maternal", ind.id);
                assert_eq!(pair.len(), 50);
            }
        }
        Ok(())
    }

    #[test]
    fn output_follows_pedigree_order() -> Result<()> {
        let pedigree = three_generations();
        let haplotypes = generate_haplotypes(&pedigree, 5, &mut fastrand::Rng::with_seed(7))?;
        assert!(haplotypes.keys().map(String::as_str).eq(pedigree.ids()));
        Ok(())
    }

    #[test]
    fn cycle_is_rejected_before_any_draw() {
        let mut pedigree = Pedigree::new();
        for (id, father, mother) in [("1", None, None), ("2", Some("1"), Some("3")), ("3", Some("1"), Some("2"))] {
            pedigree.add_individual(Individual::new(id, father, mother, Sex::Unspecified)).expect("Unique identifiers");
        }
        // No expectations: any draw would panic.
        let mut sampler = MockSampler::new();
        assert!(generate_haplotypes(&pedigree, 10, &mut sampler).is_err());
    }

    #[test]
    fn missing_parent_is_rejected() {
        let pedigree = Pedigree::from_individuals([Individual::new("3", Some("1"), Some("2"), Sex::Male)]).expect("Unique identifiers");
        let mut sampler = MockSampler::new();
        assert!(generate_haplotypes(&pedigree, 10, &mut sampler).is_err());
    }

    #[test]
    fn zero_length() -> Result<()> {
        let haplotypes = generate_haplotypes(&trio(), 0, &mut fastrand::Rng::with_seed(1))?;
        assert!(haplotypes.values().all(HaplotypePair::is_empty));
        Ok(())
    }
}
