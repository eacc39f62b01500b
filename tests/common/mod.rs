mod fixture;
pub use fixture::Fixture;

/// Parse `args` as a zrhc-sim command line, and run it.
pub fn run_cli(args: &[&str]) -> anyhow::Result<()> {
    use clap::Parser;
    let cli = parser::Cli::try_parse_from(std::iter::once("zrhc-sim").chain(args.iter().copied()))?;
    cli.serialize()?;
    zrhc_sim::run(cli)
}

/// Three generations: two founder couples, a child, and two grandchildren.
pub const PEDIGREE: &str = "\
# family id father mother gender
FAM 1 0 0 1
FAM 2 0 0 2
FAM 3 1 2 1
FAM 4 0 0 2
FAM 5 3 4 2
FAM 6 3 4 1 affected
";

pub const FOUNDERS: [&str; 3] = ["1", "2", "4"];
