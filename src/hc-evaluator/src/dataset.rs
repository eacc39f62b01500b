use std::path::Path;

use genome::{Genotype, HaplotypePair};
use indexmap::IndexMap;
use log::{debug, info};
use pedigree::{Dataset, Pedigree};
use zrhc_io::{
    read::{GenotypedFile, RecordReader},
    record::{GenotypeRecord, PhasedRecord},
};

use located_error::prelude::*;

use crate::error::DatasetError;

/// Label of the generated haplotype configuration in diagnostics.
pub const ORIGINAL: &str = "original";

/// Label of the computed haplotype configuration in diagnostics.
pub const RESULT: &str = "result";

/// Split phased records into a pedigree and its haplotype configuration.
fn phased_configuration(records: Vec<PhasedRecord>) -> Result<(Pedigree, IndexMap<String, HaplotypePair>)> {
    let mut pedigree   = Pedigree::new();
    let mut haplotypes = IndexMap::with_capacity(records.len());
    for PhasedRecord { individual, haplotypes: pair } in records {
        let id = individual.id.clone();
        pedigree.add_individual(individual).with_loc(|| DatasetError::DuplicateHaplotypes(id.clone()))?;
        haplotypes.insert(id, pair);
    }
    Ok((pedigree, haplotypes))
}

/// Index genotype records by identifier.
fn genotype_table(records: Vec<GenotypeRecord>) -> Result<IndexMap<String, Vec<Genotype>>> {
    let mut genotypes = IndexMap::with_capacity(records.len());
    for GenotypeRecord { individual, genotypes: sequence } in records {
        if genotypes.contains_key(&individual.id) {
            return Err(anyhow!(DatasetError::DuplicateGenotypes(individual.id))).loc("While indexing genotype records")
        }
        genotypes.insert(individual.id, sequence);
    }
    Ok(genotypes)
}

/// Build the original dataset: pedigree and haplotypes are taken from the ground-truth comment records, while
/// the genotypes are taken from the (masked) genotype records.
///
/// # Errors
/// - if an individual is described twice, either by haplotype or genotype records.
pub fn from_genotyped(file: GenotypedFile) -> Result<Dataset> {
    let (pedigree, haplotypes) = phased_configuration(file.haplotypes)
        .with_loc(|| DatasetError::Load(ORIGINAL))?;
    let genotypes = genotype_table(file.genotypes)
        .with_loc(|| DatasetError::Load(ORIGINAL))?;
    Ok(Dataset::new(pedigree, haplotypes, genotypes))
}

/// Build a result dataset from a solver's phased records. Genotypes are the unmasked projection of each pair.
///
/// # Errors
/// - if an individual is described twice.
pub fn from_phased(records: Vec<PhasedRecord>) -> Result<Dataset> {
    let (pedigree, haplotypes) = phased_configuration(records)
        .with_loc(|| DatasetError::Load(RESULT))?;
    Ok(Dataset::from_haplotypes(pedigree, haplotypes))
}

/// Read the file produced by the generator.
///
/// # Errors
/// - if the file cannot be read, or holds invalid records.
pub fn load_original(path: &Path) -> Result<Dataset> {
    info!("Reading original file '{}'...", path.display());
    let file = RecordReader::from_path(path)?.read_genotyped()
        .with_loc(|| format!("While reading {}", path.display()))?;
    debug!("Found {} haplotype records and {} genotype records", file.haplotypes.len(), file.genotypes.len());
    from_genotyped(file)
}

/// Read the haplotype configuration computed by a solver.
///
/// # Errors
/// - if the file cannot be read, or holds invalid records.
pub fn load_result(path: &Path) -> Result<Dataset> {
    info!("Reading result file '{}'...", path.display());
    let records = RecordReader::from_path(path)?.read_phased()
        .with_loc(|| format!("While reading {}", path.display()))?;
    debug!("Found {} phased records", records.len());
    from_phased(records)
}
