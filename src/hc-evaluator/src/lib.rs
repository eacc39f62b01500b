use log::{info, trace};
use pedigree::{Dataset, NO_PARENT};
use parser::RateConvention;
use zrhc_io::write::GenericWriter;

use located_error::prelude::*;

mod error;
pub use error::{ConsistencyError, DatasetError};

pub mod dataset;
pub mod consistency;
pub mod discordance;
pub mod report;

use discordance::count_phase_aware_errors;
use report::{EvaluationReport, IndividualStats, LocusCounts};

/// Evaluation parameters.
/// - `normalize_founders`: compare founders in their most favourable orientation.
/// - `expensive_checks`  : ensure every strand of both configurations was inherited from a parent.
/// - `convention`        : numerators of the maternal error rates.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationOptions {
    pub normalize_founders: bool,
    pub expensive_checks  : bool,
    pub convention        : RateConvention,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self { normalize_founders: true, expensive_checks: false, convention: RateConvention::default() }
    }
}

impl From<&parser::Evaluate> for EvaluationOptions {
    fn from(args: &parser::Evaluate) -> Self {
        Self {
            normalize_founders: !args.dont_normalize_founders,
            expensive_checks  : args.expensive_checks,
            convention        : args.rate_convention,
        }
    }
}

/// Compare a computed haplotype configuration against the generated one.
/// `labels` are the (original, result) names printed in the report.
///
/// Every consistency check is performed before any statistic gets computed.
///
/// # Errors
/// - if both datasets are structurally inconsistent.
/// - if `options.expensive_checks` is set and a strand was not inherited from a parent.
pub fn evaluate(original: &Dataset, result: &Dataset, labels: (&str, &str), options: EvaluationOptions) -> Result<EvaluationReport> {
    consistency::check_structure(original, result).loc("While checking consistency")?;
    if options.expensive_checks {
        consistency::check_inheritance(original, dataset::ORIGINAL).loc("While checking consistency")?;
        consistency::check_inheritance(result, dataset::RESULT).loc("While checking consistency")?;
    }

    info!("Computing differences...");
    let mut report = EvaluationReport::new(labels.0, labels.1, options.convention);
    for ind in original.pedigree.iter() {
        let missing = || DatasetError::Load(dataset::ORIGINAL);
        let genotypes  = original.genotypes_of(&ind.id).with_loc(missing)?;
        let orig_pair  = original.haplotypes_of(&ind.id).with_loc(missing)?;
        let res_pair   = result.haplotypes_of(&ind.id).with_loc(|| DatasetError::Load(dataset::RESULT))?;

        let can_swap = options.normalize_founders && ind.is_founder();
        let (errors, orientation) = count_phase_aware_errors(genotypes, orig_pair, res_pair, can_swap);
        trace!("Individual {:>4}: {orientation} orientation - errors: {errors}", ind.id);

        report.push(IndividualStats {
            id    : ind.id.clone(),
            father: ind.father().unwrap_or(NO_PARENT).to_string(),
            mother: ind.mother().unwrap_or(NO_PARENT).to_string(),
            loci  : LocusCounts::from_genotypes(genotypes),
            errors,
            orientation,
        });
    }
    Ok(report)
}

/// Run the haplotype configuration evaluator.
///
/// # Errors
/// - if any of the input files cannot be read, or holds invalid records.
/// - if both configurations are inconsistent.
/// - if the report cannot be written.
pub fn run(args: &parser::Evaluate) -> Result<()> {
    info!("Evaluation of computed haplotype configurations");
    info!("Original file: '{}'", args.original.display());
    info!("Result file:   '{}'", args.result.display());
    info!("Using {}", args.rate_convention);

    let original = dataset::load_original(&args.original)?;
    let result   = dataset::load_result(&args.result)?;

    let labels = (args.original.display().to_string(), args.result.display().to_string());
    let report = evaluate(&original, &result, (labels.0.as_str(), labels.1.as_str()), EvaluationOptions::from(args))?;

    let mut writer = GenericWriter::new(args.output.as_ref())?;
    writer.write_iter(report.lines(args.full_stats, args.show_header)).loc("While writing evaluation report")?;
    Ok(())
}
