use parser::{Cli, Commands::{Generate, Evaluate, FromYaml}};
use log::info;

use located_error::prelude::*;

/// Unpack the command line and run the appropriate module.
///
/// # Errors
/// - any error raised by the haplotype generator or evaluator.
/// - if a `from-yaml` configuration file cannot be deserialized.
pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Generate { generate } => {
            hc_generator::run(&generate).loc("While generating haplotype configuration")?;
        },

        Evaluate { evaluate } => {
            hc_evaluator::run(&evaluate).loc("While evaluating haplotype configuration")?;
        },

        FromYaml { yaml } => {
            info!("Loading command line arguments from {}", yaml.display());
            let cli = Cli::deserialize(&yaml)?;
            self::run(cli)?;
        },
    };
    Ok(())
}
