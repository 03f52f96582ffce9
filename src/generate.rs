//! Random map generation.

use rand::{Rng, SeedableRng, rngs::StdRng};

const DEFAULT_WIDTH: usize = 30;
const DEFAULT_HEIGHT: usize = 20;
const DEFAULT_DENSITY: f64 = 0.2;

/// Parameters for [`generate_map`].
///
/// `density` is the probability that a cell is an obstacle. With a `seed` the
/// output is reproducible; without one the generator seeds from the OS.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub width: usize,
    pub height: usize,
    pub density: f64,
    pub seed: Option<u64>,
    pub empty: char,
    pub obstacle: char,
    pub full: char,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            seed: None,
            empty: '.',
            obstacle: 'o',
            full: 'x',
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenError {
    #[error("width and height must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("density must be within [0, 1], got {0}")]
    DensityOutOfRange(f64),

    #[error("markers must be distinct")]
    DuplicateMarkers,

    #[error("markers must not be line terminators")]
    TerminatorMarker,
}

impl GenConfig {
    fn validate(&self) -> Result<(), GenError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenError::EmptyDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GenError::DensityOutOfRange(self.density));
        }
        let markers = [self.empty, self.obstacle, self.full];
        if markers.iter().any(|c| matches!(c, '\r' | '\n')) {
            return Err(GenError::TerminatorMarker);
        }
        if self.empty == self.obstacle || self.empty == self.full || self.obstacle == self.full {
            return Err(GenError::DuplicateMarkers);
        }
        Ok(())
    }
}

/// Produces a valid map text: header line, then `height` rows of `width`
/// cells, each line newline-terminated.
pub fn generate_map(config: &GenConfig) -> Result<String, GenError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut out = String::with_capacity((config.width + 1) * (config.height + 1) + 24);
    out.push_str(&format!(
        "{}{}{}{}\n",
        config.height, config.empty, config.obstacle, config.full
    ));
    for _ in 0..config.height {
        for _ in 0..config.width {
            let cell = if rng.random_bool(config.density) {
                config.obstacle
            } else {
                config.empty
            };
            out.push(cell);
        }
        out.push('\n');
    }
    Ok(out)
}
