use clap::Parser;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use bsq::generate::{GenConfig, generate_map};

#[derive(Parser, Debug)]
#[command(name = "bsq_gen", about = "Generate a random map for bsq", version)]
struct Cli {
    /// Number of columns
    #[arg(long = "width", short = 'W')]
    width: usize,

    /// Number of rows
    #[arg(long = "height", short = 'H')]
    height: usize,

    /// Probability that a cell is an obstacle
    #[arg(long = "density", short = 'd', default_value_t = 0.2)]
    density: f64,

    /// Seed for a reproducible map
    #[arg(long = "seed", short = 's')]
    seed: Option<u64>,

    /// Empty, obstacle and full markers, in that order
    #[arg(long = "markers", short = 'm', default_value = ".ox")]
    markers: String,

    /// Write the map here instead of stdout
    #[arg(long = "output", short = 'o')]
    output: Option<PathBuf>,
}

/// Writes the generated map, creating missing parent directories.
fn write_map(path: &Path, map: &str) -> Result<(), String> {
    let fail = |e: std::io::Error| format!("cannot write map to {}: {e}", path.display());
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(fail)?,
        _ => {}
    }
    fs::write(path, map).map_err(fail)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let markers: Vec<char> = cli.markers.chars().collect();
    let [empty, obstacle, full] = markers[..] else {
        return Err(format!("expected exactly 3 markers, got {:?}", cli.markers).into());
    };

    let config = GenConfig {
        width: cli.width,
        height: cli.height,
        density: cli.density,
        seed: cli.seed,
        empty,
        obstacle,
        full,
    };
    let map = generate_map(&config)?;

    match &cli.output {
        Some(path) => write_map(path, &map)?,
        None => print!("{map}"),
    }
    Ok(())
}
