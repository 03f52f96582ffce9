//! Largest empty square search.

use serde::Serialize;

use crate::map::Grid;

/// An axis-aligned square inside a grid, anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

impl Square {
    /// Builds the square whose bottom-right cell is `(row, col)`.
    fn ending_at(row: usize, col: usize, size: usize) -> Self {
        Self {
            row: row + 1 - size,
            col: col + 1 - size,
            size,
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.size).contains(&row) && (self.col..self.col + self.size).contains(&col)
    }
}

/// Finds the largest square made only of `empty` cells.
///
/// Each cell stores the side of the largest empty square ending there:
/// `1 + min(up, left, up-left)`, or 1 on the first row/column. When several
/// squares share the best size, the one whose bottom-right corner comes first
/// in row-major order wins. Returns `None` if the grid has no empty cell.
pub fn find_largest_square(grid: &Grid, empty: char) -> Option<Square> {
    let (width, height) = (grid.width(), grid.height());
    let mut dp = vec![0usize; width * height];
    let mut best: Option<Square> = None;

    for (i, row) in grid.rows().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell != empty {
                continue;
            }

            let here = i * width + j;
            let size = if i == 0 || j == 0 {
                1
            } else {
                1 + dp[here - width].min(dp[here - 1]).min(dp[here - width - 1])
            };
            dp[here] = size;

            if best.is_none_or(|b| size > b.size) {
                best = Some(Square::ending_at(i, j, size));
            }
        }
    }

    best
}

/// Overwrites every cell of `square` with `full`.
pub fn fill_square(grid: &mut Grid, square: Square, full: char) {
    for row in square.row..square.row + square.size {
        for col in square.col..square.col + square.size {
            grid.set(row, col, full);
        }
    }
}

/// Marks the largest empty square of `grid` with `full` and returns it.
/// A grid without empty cells is left untouched.
pub fn solve(grid: &mut Grid, empty: char, full: char) -> Option<Square> {
    let square = find_largest_square(grid, empty)?;
    fill_square(grid, square, full);
    Some(square)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Map;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn grid(rows: &[&str]) -> Grid {
        let width = rows[0].chars().count();
        let cells = rows.iter().flat_map(|r| r.chars()).collect();
        Grid::from_cells(cells, width, rows.len()).unwrap()
    }

    fn rendered(grid: &Grid) -> Vec<String> {
        grid.rows().map(|r| r.iter().collect()).collect()
    }

    /// Largest all-empty square found by checking every candidate.
    fn brute_force(grid: &Grid, empty: char) -> usize {
        let mut best = 0;
        for r in 0..grid.height() {
            for c in 0..grid.width() {
                let mut size = 1;
                while r + size <= grid.height() && c + size <= grid.width() {
                    let all_empty =
                        (r..r + size).all(|rr| (c..c + size).all(|cc| grid.get(rr, cc) == Some(empty)));
                    if !all_empty {
                        break;
                    }
                    best = best.max(size);
                    size += 1;
                }
            }
        }
        best
    }

    #[test]
    fn test_finds_two_by_two() {
        let mut g = grid(&[".*.", "...", "*.."]);
        let square = solve(&mut g, '.', 'x');
        // (2,0) is an obstacle, so the only 2x2 sits in columns 1-2.
        assert_eq!(square, Some(Square { row: 1, col: 1, size: 2 }));
        assert_eq!(rendered(&g), vec![".*.", ".xx", "*xx"]);
    }

    #[test]
    fn test_single_row_marks_first_empty_cell() {
        let mut g = grid(&[".*"]);
        assert_eq!(solve(&mut g, '.', 'o'), Some(Square { row: 0, col: 0, size: 1 }));
        assert_eq!(rendered(&g), vec!["o*"]);
    }

    #[test]
    fn test_all_obstacles_leaves_grid_untouched() {
        let mut g = grid(&["**", "**"]);
        let before = g.clone();
        assert_eq!(solve(&mut g, '.', 'x'), None);
        assert_eq!(g, before);
    }

    #[test]
    fn test_tie_keeps_first_bottom_right_in_row_major_order() {
        let mut g = grid(&["..*..", "..*..", "*****"]);
        assert_eq!(solve(&mut g, '.', 'x'), Some(Square { row: 0, col: 0, size: 2 }));
        assert_eq!(rendered(&g), vec!["xx*..", "xx*..", "*****"]);
    }

    #[test]
    fn test_tie_is_decided_by_bottom_right_not_top_left() {
        // Left square starts first but ends at (2,1), after the right one at (1,4).
        let g = grid(&["***..", "..*..", "..***"]);
        assert_eq!(find_largest_square(&g, '.'), Some(Square { row: 0, col: 3, size: 2 }));
    }

    #[test]
    fn test_full_empty_grid_takes_largest_fitting_square() {
        let g = grid(&["....", "....", "...."]);
        assert_eq!(find_largest_square(&g, '.'), Some(Square { row: 0, col: 0, size: 3 }));
    }

    #[test]
    fn test_square_contains() {
        let s = Square { row: 1, col: 2, size: 2 };
        assert!(s.contains(1, 2));
        assert!(s.contains(2, 3));
        assert!(!s.contains(3, 3));
        assert!(!s.contains(1, 1));
    }

    #[test]
    fn test_solver_matches_brute_force_and_only_touches_empty_cells() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let width = rng.random_range(1..=9);
            let height = rng.random_range(1..=9);
            let cells: Vec<char> = (0..width * height)
                .map(|_| if rng.random_bool(0.3) { 'o' } else { '.' })
                .collect();
            let original = Grid::from_cells(cells, width, height).unwrap();
            let expected = brute_force(&original, '.');

            let mut solved = original.clone();
            let square = solve(&mut solved, '.', 'x');
            assert_eq!(square.map_or(0, |s| s.size), expected);
            assert_eq!((solved.width(), solved.height()), (width, height));

            for r in 0..height {
                for c in 0..width {
                    let (before, after) = (original.get(r, c), solved.get(r, c));
                    match square {
                        Some(s) if s.contains(r, c) => {
                            assert_eq!(before, Some('.'));
                            assert_eq!(after, Some('x'));
                        }
                        _ => assert_eq!(before, after),
                    }
                }
            }
        }
    }

    #[test]
    fn test_solve_on_parsed_map() {
        let mut map = Map::from_text("4.ox\n....\n.o..\n....\n...o\n").unwrap();
        let square = solve(&mut map.grid, map.header.empty, map.header.full);
        assert_eq!(square, Some(Square { row: 0, col: 2, size: 2 }));
    }
}
