use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use smf::{Driver, Operation, OutputFormat, RunConfig};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract or multiply two sparse integer matrix files")]
struct Cli {
    /// Operation to perform; prompted for when omitted
    #[arg(value_enum, ignore_case = true)]
    operation: Option<Operation>,

    /// First matrix file; prompted for when omitted
    left: Option<PathBuf>,

    /// Second matrix file; prompted for when omitted
    right: Option<PathBuf>,

    /// Rendering of the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the result to this file instead of the console
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Read matrix files with a plain read instead of a memory map
    #[arg(long)]
    no_mmap: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            operation: cli.operation,
            left: cli.left,
            right: cli.right,
            format: cli.format,
            output: cli.output,
            use_mmap: cfg!(feature = "mmap") && !cli.no_mmap,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = RunConfig::from(Cli::parse());
    log::debug!("{config:?}");

    let mut driver = Driver::new(io::stdin().lock(), io::stdout().lock());
    let outcome = driver.run(&config)?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
