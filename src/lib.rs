//! Finds the largest empty square in a text map and marks it.
//!
//! Input is a header line `<rows><empty><obstacle><full>` followed by the
//! grid rows. Processing runs [`lines`] → [`map`] → [`solve`] → [`render`];
//! [`pipeline`] ties them together per input source.

pub mod generate;
pub mod lines;
pub mod map;
pub mod pipeline;
pub mod render;
pub mod solve;
pub mod source;

pub use map::{Grid, Map, MapHeader, ParseError};
pub use pipeline::{BsqError, OutputFormat, RunConfig, Solved, process_bytes, process_text};
pub use solve::{Square, solve};
