//! Text and JSON output for solved maps.

use std::fmt;

use serde::Serialize;

use crate::map::{Grid, Map};
use crate::solve::Square;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Rows joined by `\n`, without a trailing newline.
pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

/// Machine-readable summary of one processed map.
#[derive(Debug, Clone, Serialize)]
pub struct MapReport {
    pub source: String,
    pub rows: usize,
    pub cols: usize,
    pub empty: char,
    pub obstacle: char,
    pub full: char,
    pub square: Option<Square>,
    pub map: Vec<String>,
}

impl MapReport {
    pub fn new(source: impl Into<String>, map: &Map, square: Option<Square>) -> Self {
        Self {
            source: source.into(),
            rows: map.grid.height(),
            cols: map.grid.width(),
            empty: map.header.empty,
            obstacle: map.header.obstacle,
            full: map.header.full,
            square,
            map: map.grid.rows().map(|r| r.iter().collect()).collect(),
        }
    }
}

/// Pretty-printed JSON for `report`.
pub fn render_json(report: &MapReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::split_lines;
    use crate::solve::solve;

    #[test]
    fn test_render_joins_rows_without_trailing_newline() {
        let map = Map::from_text("2.ox\n.o.\n...\n").unwrap();
        assert_eq!(render(&map.grid), ".o.\n...");
    }

    #[test]
    fn test_render_single_row() {
        let map = Map::from_text("1.ox\n.\n").unwrap();
        assert_eq!(render(&map.grid), ".");
    }

    #[test]
    fn test_unsolved_render_reproduces_content_lines() {
        let text = "3-#@\n-#--\n----\n#--#\n";
        let map = Map::from_text(text).unwrap();
        let rendered = render(&map.grid);
        assert_eq!(split_lines(&rendered), split_lines(text)[1..].to_vec());
    }

    #[test]
    fn test_json_report_carries_square_and_rows() {
        let mut map = Map::from_text("2.ox\n..\n..\n").unwrap();
        let square = solve(&mut map.grid, map.header.empty, map.header.full);
        let report = MapReport::new("stdin", &map, square);
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["source"], "stdin");
        assert_eq!(json["rows"], 2);
        assert_eq!(json["cols"], 2);
        assert_eq!(json["full"], "x");
        assert_eq!(json["square"]["size"], 2);
        assert_eq!(json["map"], serde_json::json!(["xx", "xx"]));
    }

    #[test]
    fn test_json_report_without_square_is_null() {
        let map = Map::from_text("1.ox\noo\n").unwrap();
        let report = MapReport::new("a.map", &map, None);
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert!(json["square"].is_null());
    }
}
