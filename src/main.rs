use aggplot::{
    env::Env,
    tasks::report::{Report, ReportArgs, ReportConfig},
};
use clap::Parser;
use env_logger::{Builder, Target};
use std::{path::PathBuf, process};

/// Plot the aggregated results of a token misuse experiment run
#[derive(Parser)]
#[command(name = "aggplot")]
struct Cli {
    /// Aggregate run directory, e.g. runs/_aggregate/<timestamp>/
    agg_dir: Option<PathBuf>,

    #[command(flatten)]
    report_args: ReportArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Progress output goes to stdout.
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    let mut builder = Builder::from_env(env);
    builder.target(Target::Stdout);
    builder.init();

    let cli = Cli::parse();
    let Some(agg_dir) = cli.agg_dir else {
        println!("{}", Env::usage());
        process::exit(1);
    };

    Report::run(&agg_dir, &ReportConfig::from(&cli.report_args))?;

    Ok(())
}
