use std::{
    ffi::OsStr,
    fmt::{self, Display, Formatter},
    fs::File,
    io::IsTerminal,
    path::{Path, PathBuf},
};

use located_error::prelude::*;

use clap::{Parser, Subcommand, ArgEnum};
use serde::{Serialize, Deserialize};
use log::debug;

mod error;
pub use error::ParserError;

/// Default number of loci of each generated genotype.
pub const DEFAULT_GENOTYPE_LENGTH: usize = 100;

/// Default per-locus probability of masking a generated genotype.
pub const DEFAULT_MISSING_PROBABILITY: f64 = 0.1;

/// Default seed of the haplotype generator.
pub const DEFAULT_SEED: u64 = 122_295;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="zrhc-sim", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// zrhc-sim: Simulate and evaluate Zero-Recombinant Haplotype Configurations of genotyped pedigrees.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    /// Serialize the parsed command line arguments into a .yaml file.
    ///
    /// The resulting file may then be used to re-run the exact same command, through the `from-yaml` subcommand.
    #[clap(long, global=true)]
    pub dump_args: Option<PathBuf>,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Log the command line arguments, and serialize them within the `--dump-args` file, if requested.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to parse `Self` to a string.
    /// - if the `--dump-args` file cannot be written.
    pub fn serialize(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self)
            .with_loc(|| ParserError::Serialize)?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        match &self.dump_args {
            Some(path) => std::fs::write(path, serialized)
                .with_loc(|| ParserError::WriteArgs(path.display().to_string())),
            None => Ok(()),
        }
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` cannot be opened.
    /// - if `serde_yaml` fails to parse the provided file to `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let file = File::open(yaml)
            .with_loc(|| ParserError::Deserialize(yaml.display().to_string()))?;
        serde_yaml::from_reader(file)
            .with_loc(|| ParserError::Deserialize(yaml.display().to_string()))
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Generate a random zero-recombinant haplotype configuration, along with its (partially missing) genotypes.
    ///
    /// The pedigree is read from --pedigree, or from the standard input. The genotyped pedigree is written to
    /// --output, or to the standard output. Ground-truth haplotypes are written as `# GENERATED_HAPLOTYPES` comments.
    Generate {
        #[clap(flatten)]
        generate: Generate,
    },

    /// Evaluate a computed haplotype configuration against the generated one.
    Evaluate {
        #[clap(flatten)]
        evaluate: Evaluate,
    },

    /// Run zrhc-sim using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply a zrhc-sim command using the exact same parameters
    /// and arguments. See --dump-args.
    FromYaml {
        yaml: PathBuf,
    },
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
pub struct Generate {
    /// Input pedigree definition file.
    ///
    /// Whitespace-separated, with columns 'family id father mother gender [phenotype]'. Unknown parents must be
    /// denoted with '0'. Gender tags are '1' (male), '2' (female) or '0' (unspecified). In the absence of a
    /// '--pedigree' argument, the program accepts a data stream from the standard input.
    /// i.e.: 'cat family.ped | zrhc-sim generate [...]'
    #[clap(short='p', long, parse(try_from_os_str=valid_input_file))]
    pub pedigree: Option<PathBuf>,

    /// Output genotyped pedigree file. Defaults to the standard output.
    #[clap(short='o', long)]
    pub output: Option<PathBuf>,

    /// Number of loci of each generated haplotype.
    #[clap(short='l', long, default_value_t=DEFAULT_GENOTYPE_LENGTH)]
    pub genotype_length: usize,

    /// Probability that a single-locus genotype has not been called. Must lie within [0, 1].
    #[clap(short='m', long, default_value_t=DEFAULT_MISSING_PROBABILITY, parse(try_from_str=parse_probability))]
    pub missing_genotype_probability: f64,

    /// Provide the RNG with a set seed.
    #[clap(short='s', long, default_value_t=DEFAULT_SEED)]
    pub seed: u64,
}

impl Default for Generate {
    fn default() -> Self {
        Self {
            pedigree                    : None,
            output                      : None,
            genotype_length             : DEFAULT_GENOTYPE_LENGTH,
            missing_genotype_probability: DEFAULT_MISSING_PROBABILITY,
            seed                        : DEFAULT_SEED,
        }
    }
}

impl Generate {
    /// Sanity Check: The program should leave if the user did not provide any pedigree input, either through
    /// `--pedigree` or through stdinput. Without this, our program would wait indefinitely for the stdin buffer.
    ///
    /// # Errors
    /// - if the user did not provide an input file, neither from stdin, nor through the `--pedigree` argument.
    pub fn check_input(&self) -> Result<(), ParserError> {
        if self.pedigree.is_none() && std::io::stdin().is_terminal() {
            return Err(ParserError::MissingPedigreeInput)
        }
        Ok(())
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
pub struct Evaluate {
    /// File containing the genotyped pedigree and the original haplotype configuration (as produced by `generate`)
    #[clap(short='o', long, parse(try_from_os_str=valid_input_file))]
    pub original: PathBuf,

    /// File containing the computed haplotype configuration.
    #[clap(short='r', long, parse(try_from_os_str=valid_input_file))]
    pub result: PathBuf,

    /// Print statistics for each individual, instead of the pedigree-wide summary.
    #[clap(short='f', long)]
    pub full_stats: bool,

    /// Print the header.
    #[clap(short='H', long)]
    pub show_header: bool,

    /// Do not swap the haplotypes of founders.
    ///
    /// By default, the strands of each founder are swapped whenever this yields a lower amount of phase errors,
    /// since the phase of a founder cannot be inferred from its ancestry.
    #[clap(short='n', long)]
    pub dont_normalize_founders: bool,

    /// Perform additional, computationally-expensive consistency checks.
    ///
    /// Ensure every haplotype of the original and computed configurations has been inherited from a parent.
    #[clap(short='c', long)]
    pub expensive_checks: bool,

    /// Select the numerators used to compute the average maternal error rates.
    ///
    /// 'corrected': maternal rates are computed from maternal errors.{n}
    /// 'legacy'   : maternal rates are computed from paternal errors, reproducing the figures of earlier tools.{n}
    #[clap(long, arg_enum, default_value("corrected"))]
    pub rate_convention: RateConvention,

    /// Output report file. Defaults to the standard output.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ArgEnum, Serialize, Deserialize)]
pub enum RateConvention {
    #[default]
    Corrected,
    Legacy,
}

impl Display for RateConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrected => write!(f, "corrected maternal error rates"),
            Self::Legacy    => write!(f, "legacy maternal error rates (paternal numerators)"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FileEntity {File}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File => write!(f, "File"),
        }
    }
}

impl FileEntity {
    fn validate(self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File => path.is_file(),
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(self, path.display().to_string()))
        }
    }
}

fn assert_filesystem_entity_is_valid(s: &OsStr, entity: FileEntity) -> Result<()> {
    use ParserError::MissingFileEntity;
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFileEntity(entity, path.display().to_string()))
            .loc("While parsing arguments.")
    }

    entity.validate(path).loc("While parsing arguments.")
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_filesystem_entity_is_valid(s, FileEntity::File)
        .loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}

/// Parse a probability, and ensure it lies within the [0, 1] range.
fn parse_probability(s: &str) -> Result<f64> {
    use ParserError::ParseProbability;

    const MIN_PROB: f64 = 0.0;
    const MAX_PROB: f64 = 1.0;

    let prob = s.parse::<f64>().with_loc(|| format!("While parsing {s}"))?;
    match (MIN_PROB..=MAX_PROB).contains(&prob) {
        true  => Ok(prob),
        false => Err(anyhow!(ParseProbability(MIN_PROB, MAX_PROB, prob))).with_loc(|| format!("While parsing {s}"))
    }
}
