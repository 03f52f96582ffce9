//! One full split → parse → solve → render run per input.

use std::str::Utf8Error;

use futures::future::join_all;

use crate::map::{Map, ParseError};
use crate::render::{MapReport, render, render_json};
use crate::solve::{Square, solve};
use crate::source::{Source, read_source};

/// Errors that abort one input. Structural failures all read `map error`.
#[derive(Debug, thiserror::Error)]
pub enum BsqError {
    #[error("{source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("map error")]
    Encoding(#[from] Utf8Error),

    #[error("map error")]
    Map(#[from] ParseError),

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl BsqError {
    /// Whether the input itself was rejected, as opposed to a read or
    /// internal failure.
    pub fn is_map_error(&self) -> bool {
        matches!(self, BsqError::Encoding(_) | BsqError::Map(_))
    }

    /// Underlying reason, for verbose diagnostics.
    pub fn detail(&self) -> String {
        match self {
            BsqError::Io { error, .. } => error.to_string(),
            BsqError::Encoding(e) => format!("input is not valid UTF-8: {e}"),
            BsqError::Map(e) => e.to_string(),
            BsqError::Report(e) => e.to_string(),
            BsqError::Join(e) => e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Per-run settings shared by every input.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub format: OutputFormat,
}

/// A map after the solver has run on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solved {
    pub map: Map,
    pub square: Option<Square>,
}

impl Solved {
    pub fn render(&self) -> String {
        render(&self.map.grid)
    }
}

/// Parses and solves one text buffer.
pub fn process_text(text: &str) -> Result<Solved, BsqError> {
    let mut map = Map::from_text(text)?;
    let square = solve(&mut map.grid, map.header.empty, map.header.full);
    Ok(Solved { map, square })
}

/// Like [`process_text`], rejecting input that is not UTF-8.
pub fn process_bytes(bytes: &[u8]) -> Result<Solved, BsqError> {
    process_text(std::str::from_utf8(bytes)?)
}

/// Result of one source: its label and either the formatted output or the
/// error that stopped it.
#[derive(Debug)]
pub struct Outcome {
    pub source: Source,
    pub result: Result<String, BsqError>,
}

fn format_solved(source: &Source, solved: &Solved, format: OutputFormat) -> Result<String, BsqError> {
    match format {
        OutputFormat::Text => Ok(solved.render()),
        OutputFormat::Json => {
            let report = MapReport::new(source.label(), &solved.map, solved.square);
            Ok(render_json(&report)?)
        }
    }
}

async fn run_source(source: Source, format: OutputFormat) -> Outcome {
    let bytes = match read_source(&source).await {
        Ok(b) => b,
        Err(error) => {
            let source_name = source.label();
            return Outcome {
                source,
                result: Err(BsqError::Io { source_name, error }),
            };
        }
    };

    let worker_source = source.clone();
    let result = tokio::task::spawn_blocking(move || {
        let solved = process_bytes(&bytes)?;
        format_solved(&worker_source, &solved, format)
    })
    .await
    .map_err(BsqError::from)
    .and_then(|r| r);

    Outcome { source, result }
}

/// Processes every source concurrently, returning outcomes in input order.
pub async fn run_sources(sources: Vec<Source>, config: &RunConfig) -> Vec<Outcome> {
    join_all(sources.into_iter().map(|s| run_source(s, config.format))).await
}
