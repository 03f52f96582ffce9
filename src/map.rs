//! Map header and grid parsing.
//!
//! A map is a header line `<rows><empty><obstacle><full>` followed by exactly
//! `rows` lines of equal width, each cell being the empty or the obstacle
//! marker.

use crate::lines::split_lines;

/// Reasons a map is rejected. Users only ever see `map error`; the variant is
/// kept for verbose diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a header and at least one row, found {0} line(s)")]
    TooFewLines(usize),

    #[error("header must be at least 4 characters, found {0}")]
    HeaderTooShort(usize),

    #[error("header markers must be distinct, found {empty:?} {obstacle:?} {full:?}")]
    DuplicateMarkers { empty: char, obstacle: char, full: char },

    #[error("row count {0:?} is not a plain decimal number")]
    InvalidRowCount(String),

    #[error("row count must be positive")]
    ZeroRowCount,

    #[error("row count {0} is too large")]
    RowCountOverflow(String),

    #[error("header announces {expected} row(s), found {found}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("first row is empty")]
    EmptyRow,

    #[error("row {row} has width {found}, expected {expected}")]
    WidthMismatch { row: usize, expected: usize, found: usize },

    #[error("row {row} column {col}: unexpected character {found:?}")]
    InvalidCell { row: usize, col: usize, found: char },
}

/// Parsed header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    pub rows: usize,
    pub empty: char,
    pub obstacle: char,
    pub full: char,
}

impl MapHeader {
    /// Parses a header line: every character but the last three must be an
    /// ASCII digit, the last three are the empty, obstacle and full markers.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < 4 {
            return Err(ParseError::HeaderTooShort(chars.len()));
        }

        let split = chars.len() - 3;
        let (empty, obstacle, full) = (chars[split], chars[split + 1], chars[split + 2]);
        if empty == obstacle || empty == full || obstacle == full {
            return Err(ParseError::DuplicateMarkers { empty, obstacle, full });
        }

        let digits = &chars[..split];
        let mut rows: usize = 0;
        for &c in digits {
            let Some(d) = c.to_digit(10) else {
                return Err(ParseError::InvalidRowCount(digits.iter().collect()));
            };
            rows = rows
                .checked_mul(10)
                .and_then(|v| v.checked_add(d as usize))
                .ok_or_else(|| ParseError::RowCountOverflow(digits.iter().collect()))?;
        }
        if rows == 0 {
            return Err(ParseError::ZeroRowCount);
        }

        Ok(Self { rows, empty, obstacle, full })
    }
}

/// Rectangular character grid stored row-major in one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Builds a grid from a row-major buffer. Returns `None` when the buffer
    /// length is not `width * height`.
    pub fn from_cells(cells: Vec<char>, width: usize, height: usize) -> Option<Self> {
        (width.checked_mul(height)? == cells.len()).then_some(Self { cells, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Overwrites one cell. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: char) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = value;
        }
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: char) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }
}

/// A validated map: header plus grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub header: MapHeader,
    pub grid: Grid,
}

impl Map {
    /// Splits and parses a whole input buffer.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        parse_map(&split_lines(text))
    }
}

/// Validates `lines` (header first) and builds the grid.
pub fn parse_map(lines: &[&str]) -> Result<Map, ParseError> {
    if lines.len() < 2 {
        return Err(ParseError::TooFewLines(lines.len()));
    }

    let header = MapHeader::parse(lines[0])?;
    let content = &lines[1..];
    if content.len() != header.rows {
        return Err(ParseError::RowCountMismatch {
            expected: header.rows,
            found: content.len(),
        });
    }

    let width = content[0].chars().count();
    if width == 0 {
        return Err(ParseError::EmptyRow);
    }

    for (row, line) in content.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(ParseError::WidthMismatch { row, expected: width, found });
        }
    }

    let mut cells = Vec::with_capacity(width * header.rows);
    for (row, line) in content.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if c != header.empty && c != header.obstacle {
                return Err(ParseError::InvalidCell { row, col, found: c });
            }
            cells.push(c);
        }
    }

    Ok(Map {
        header,
        grid: Grid {
            cells,
            width,
            height: header.rows,
        },
    })
}
