use genome::{Allele, Genotype};
use log::info;
use pedigree::{Dataset, Pedigree};
use zrhc_io::{
    read::PedigreeReader,
    record::{GenotypeRecord, HaplotypeRecord, PhasedRecord},
    write::GenericWriter,
};

use located_error::prelude::*;

mod error;
pub use error::GeneratorError;

pub mod sampler;
pub use sampler::Sampler;

pub mod inheritance;
pub mod masking;

/// Generate a zero-recombinant haplotype configuration for `pedigree`, along with its masked genotypes.
/// Every random draw goes through `sampler`: founder alleles first, then transmission bits, then masking decisions.
///
/// # Errors
/// - if `probability` does not lie within [0, 1]
/// - if `pedigree` cannot be sorted parents-first.
pub fn generate(pedigree: Pedigree, length: usize, probability: f64, sampler: &mut dyn Sampler) -> Result<Dataset> {
    masking::validate_probability(probability).loc("While checking generator parameters")?;
    let haplotypes = inheritance::generate_haplotypes(&pedigree, length, sampler)
        .loc("While generating haplotypes")?;
    let genotypes = masking::mask_genotypes(&haplotypes, probability, sampler)
        .loc("While generating genotypes")?;
    Ok(Dataset::new(pedigree, haplotypes, genotypes))
}

/// Ground-truth haplotype records of `dataset`, in pedigree order.
///
/// # Errors
/// - `GeneratorError::MissingHaplotypes` if an individual has no haplotypes.
pub fn haplotype_records(dataset: &Dataset) -> Result<Vec<HaplotypeRecord>> {
    dataset.pedigree.iter()
        .map(|ind| {
            let haplotypes = dataset.haplotypes_of(&ind.id)
                .with_loc(|| GeneratorError::MissingHaplotypes(ind.id.clone()))?;
            Ok(HaplotypeRecord(PhasedRecord { individual: ind.clone(), haplotypes: haplotypes.clone() }))
        })
        .collect()
}

/// Genotype records of `dataset`, in pedigree order.
///
/// # Errors
/// - `GeneratorError::MissingHaplotypes` if an individual has no genotypes.
pub fn genotype_records(dataset: &Dataset) -> Result<Vec<GenotypeRecord>> {
    dataset.pedigree.iter()
        .map(|ind| {
            let genotypes = dataset.genotypes_of(&ind.id)
                .with_loc(|| GeneratorError::MissingHaplotypes(ind.id.clone()))?;
            Ok(GenotypeRecord { individual: ind.clone(), genotypes: genotypes.to_vec() })
        })
        .collect()
}

/// Write the ground-truth haplotype comments, followed by the genotyped pedigree.
///
/// # Errors
/// - if any record cannot be written.
pub fn write_dataset(dataset: &Dataset, writer: &mut GenericWriter) -> Result<()> {
    info!("Saving the generated haplotype configuration...");
    writer.write_iter(haplotype_records(dataset)?).loc("While writing haplotype records")?;
    info!("Saving the genotyped pedigree...");
    writer.write_iter(genotype_records(dataset)?).loc("While writing genotype records")
}

/// Run the haplotype configuration generator.
///
/// # Errors
/// - if the pedigree cannot be read, and/or is invalid.
/// - if the output cannot be written.
pub fn run(args: &parser::Generate) -> Result<()> {
    info!("Zero-recombinant genotyped pedigree generation with missing data");
    info!("Haplotype encoding: allele1= '{}', allele2= '{}'", Allele::One, Allele::Two);
    info!("Genotype encoding:  homo1= '{}', homo2= '{}', heter= '{}', missing= '{}'",
        Genotype::HomozygousOne, Genotype::HomozygousTwo, Genotype::Heterozygous, Genotype::Missing
    );
    info!("Genotype length: {}", args.genotype_length);
    info!("Missing genotype probability: {}", args.missing_genotype_probability);
    info!("Seed: {}", args.seed);

    args.check_input().loc("While reading the input pedigree")?;
    let pedigree = match &args.pedigree {
        Some(path) => PedigreeReader::from_path(path)?,
        None       => PedigreeReader::from_reader(std::io::stdin().lock()).loc("While reading pedigree from stdin")?,
    };
    info!("Pedigree size: {:>6}", pedigree.len());
    info!("No. of founders: {:>4}", pedigree.founders().count());

    let mut rng = fastrand::Rng::with_seed(args.seed);
    let dataset = generate(pedigree, args.genotype_length, args.missing_genotype_probability, &mut rng)?;

    let mut writer = GenericWriter::new(args.output.as_ref())?;
    write_dataset(&dataset, &mut writer)?;
    info!("Terminated!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use genome::Sex;
    use pedigree::Individual;

    fn family() -> Pedigree {
        let mut pedigree = Pedigree::new();
        for (id, father, mother, sex) in [
            ("1", None, None, Sex::Male),
            ("2", None, None, Sex::Female),
            ("3", Some("1"), Some("2"), Sex::Male),
            ("4", None, None, Sex::Female),
            ("5", Some("3"), Some("4"), Sex::Female),
        ] {
            pedigree.add_individual(Individual::new(id, father, mother, sex)).expect("Unique identifiers");
        }
        pedigree
    }

    #[test]
    fn reproducibility() -> Result<()> {
        let run = |seed| generate(family(), 100, 0.1, &mut fastrand::Rng::with_seed(seed));
        let (first, second) = (run(122_295)?, run(122_295)?);
        assert_eq!(first.haplotypes, second.haplotypes);
        assert_eq!(first.genotypes, second.genotypes);

        let other = run(1)?;
        assert_ne!(first.haplotypes, other.haplotypes);
        Ok(())
    }

    #[test]
    fn genotypes_are_projected_from_haplotypes() -> Result<()> {
        let dataset = generate(family(), 60, 0.2, &mut fastrand::Rng::with_seed(3))?;
        for (id, pair) in &dataset.haplotypes {
            let genotypes = dataset.genotypes_of(id).expect("Every individual should be genotyped");
            assert_eq!(genotypes.len(), 60);
            for (masked, projected) in genotypes.iter().zip(pair.genotypes()) {
                assert!(masked.is_missing() || *masked == projected);
            }
        }
        Ok(())
    }

    #[test]
    fn records_follow_pedigree_order() -> Result<()> {
        let dataset = generate(family(), 4, 0.0, &mut fastrand::Rng::with_seed(3))?;
        let haplotypes = haplotype_records(&dataset)?;
        let genotypes  = genotype_records(&dataset)?;
        let expected = vec!["1", "2", "3", "4", "5"];
        assert_eq!(haplotypes.iter().map(|r| r.0.individual.id.as_str()).collect::<Vec<_>>(), expected);
        assert_eq!(genotypes.iter().map(|r| r.individual.id.as_str()).collect::<Vec<_>>(), expected);
        Ok(())
    }

    #[test]
    fn write_then_read() -> Result<()> {
        let dataset = generate(family(), 8, 0.5, &mut fastrand::Rng::with_seed(11))?;
        let mut buffer = Vec::new();
        {
            let mut writer = GenericWriter::from_writer(&mut buffer);
            write_dataset(&dataset, &mut writer)?;
        }
        let output = String::from_utf8(buffer)?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[..5].iter().all(|line| line.starts_with("# GENERATED_HAPLOTYPES\t0\t")));
        assert!(lines[5..].iter().all(|line| line.starts_with("0\t")));
        assert_eq!(lines[7].split('\t').take(6).collect::<Vec<_>>(), vec!["0", "3", "1", "2", "1", "phenotype"]);

        let file = zrhc_io::read::RecordReader::new(output.as_bytes()).read_genotyped()?;
        assert_eq!(file.haplotypes.len(), 5);
        for record in file.haplotypes {
            assert_eq!(dataset.haplotypes_of(&record.individual.id), Some(&record.haplotypes));
        }
        for record in file.genotypes {
            assert_eq!(dataset.genotypes_of(&record.individual.id), Some(record.genotypes.as_slice()));
        }
        Ok(())
    }

    #[test]
    fn empty_pedigree() -> Result<()> {
        let dataset = generate(Pedigree::new(), 10, 0.1, &mut fastrand::Rng::with_seed(0))?;
        assert!(dataset.haplotypes.is_empty());
        assert!(genotype_records(&dataset)?.is_empty());
        Ok(())
    }

    #[test]
    fn invalid_probability() {
        assert!(generate(family(), 10, 1.5, &mut fastrand::Rng::with_seed(0)).is_err());
    }
}
