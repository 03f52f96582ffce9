use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bsq::pipeline::{BsqError, OutputFormat, RunConfig, run_sources};
use bsq::source::Source;

#[derive(Parser, Debug)]
#[command(
    name = "bsq",
    about = "Find and mark the largest empty square in each map",
    version
)]
struct Cli {
    /// Map files to process; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long = "format", short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Explain why a map was rejected
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    let config = RunConfig { format: cli.format };
    let multiple = cli.files.len() > 1;
    let sources = Source::from_paths(cli.files);

    let outcomes = run_sources(sources, &config).await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for outcome in outcomes {
        match outcome.result {
            Ok(text) => {
                writeln!(out, "{text}")?;
                if multiple {
                    writeln!(out)?;
                }
            }
            Err(e) => {
                failed = true;
                out.flush()?;
                match e {
                    BsqError::Io { .. } => eprintln!("{e}"),
                    _ if !e.is_map_error() => eprintln!("{}: {e}", outcome.source),
                    _ if cli.verbose => eprintln!("{}: map error: {}", outcome.source, e.detail()),
                    _ => eprintln!("map error"),
                }
            }
        }
    }
    out.flush()?;

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
