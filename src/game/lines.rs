//! Enumeration of every straight run of `run_length` cells on a square grid.
//!
//! A catalog is a pure function of its [`GridSpec`]: it is generated once and
//! never touches board state. Lines are emitted horizontal first, then
//! vertical, then `\` diagonals, then `/` diagonals, and that order is stable.

use std::sync::{Arc, OnceLock};

use super::board::Board;
use super::player::Player;
use crate::error::GridError;

/// Widest grid the terminal front end can label (one letter per column).
pub const MAX_SIZE: usize = 26;

/// Grid side length and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    size: usize,
    run_length: usize,
}

impl GridSpec {
    /// 7x7 grid, four in a row.
    pub const STANDARD: GridSpec = GridSpec {
        size: 7,
        run_length: 4,
    };

    /// 3x3 grid, three in a row (classic tic-tac-toe).
    pub const CLASSIC: GridSpec = GridSpec {
        size: 3,
        run_length: 3,
    };

    pub fn new(size: usize, run_length: usize) -> Result<Self, GridError> {
        if run_length < 2 {
            return Err(GridError::RunTooShort(run_length));
        }
        if size < run_length {
            return Err(GridError::RunExceedsGrid { size, run_length });
        }
        if size > MAX_SIZE {
            return Err(GridError::GridTooLarge {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(GridSpec { size, run_length })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Number of lines a complete catalog holds: `2·N·(N−K+1) + 2·(N−K+1)²`.
    pub fn expected_line_count(&self) -> usize {
        let starts = self.size - self.run_length + 1;
        2 * self.size * starts + 2 * starts * starts
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top-left to bottom-right (`\`)
    Diagonal,
    /// Top-right to bottom-left (`/`)
    AntiDiagonal,
}

/// One candidate winning run: `run_length` distinct positions in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    direction: Direction,
    positions: Vec<usize>,
}

impl Line {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// The player occupying every cell of this line, if one does.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let (&first, rest) = self.positions.split_first()?;
        let cell = board.get(first)?;
        let player = cell.owner()?;
        rest.iter()
            .all(|&p| board.get(p) == Some(cell))
            .then_some(player)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCatalog {
    spec: GridSpec,
    lines: Vec<Line>,
    /// For each board position, indices into `lines` of the lines crossing it
    by_position: Vec<Vec<usize>>,
}

impl LineCatalog {
    /// Enumerate every line for `spec`.
    pub fn generate(spec: GridSpec) -> Self {
        let n = spec.size;
        let k = spec.run_length;
        let at = |row: usize, col: usize| row * n + col;
        let mut lines = Vec::with_capacity(spec.expected_line_count());

        for row in 0..n {
            for col in 0..=n - k {
                lines.push(Line {
                    direction: Direction::Horizontal,
                    positions: (0..k).map(|i| at(row, col + i)).collect(),
                });
            }
        }

        for col in 0..n {
            for row in 0..=n - k {
                lines.push(Line {
                    direction: Direction::Vertical,
                    positions: (0..k).map(|i| at(row + i, col)).collect(),
                });
            }
        }

        for row in 0..=n - k {
            for col in 0..=n - k {
                lines.push(Line {
                    direction: Direction::Diagonal,
                    positions: (0..k).map(|i| at(row + i, col + i)).collect(),
                });
            }
        }

        for row in 0..=n - k {
            for col in k - 1..n {
                lines.push(Line {
                    direction: Direction::AntiDiagonal,
                    positions: (0..k).map(|i| at(row + i, col - i)).collect(),
                });
            }
        }

        let mut by_position = vec![Vec::new(); spec.cell_count()];
        for (idx, line) in lines.iter().enumerate() {
            for &pos in &line.positions {
                by_position[pos].push(idx);
            }
        }

        LineCatalog {
            spec,
            lines,
            by_position,
        }
    }

    /// The shared catalog for [`GridSpec::STANDARD`], generated on first use.
    pub fn standard() -> Arc<LineCatalog> {
        static STANDARD: OnceLock<Arc<LineCatalog>> = OnceLock::new();
        STANDARD
            .get_or_init(|| Arc::new(LineCatalog::generate(GridSpec::STANDARD)))
            .clone()
    }

    /// Catalog for any spec, reusing the shared one for the standard grid.
    pub fn for_spec(spec: GridSpec) -> Arc<LineCatalog> {
        if spec == GridSpec::STANDARD {
            Self::standard()
        } else {
            Arc::new(Self::generate(spec))
        }
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines passing through `position`, in catalog order.
    pub fn lines_through(&self, position: usize) -> impl Iterator<Item = &Line> + '_ {
        self.by_position
            .get(position)
            .into_iter()
            .flatten()
            .map(|&idx| &self.lines[idx])
    }

    /// Scan every line in catalog order and return the first one fully owned
    /// by a single player.
    pub fn find_winner<'a>(&'a self, board: &Board) -> Option<(Player, &'a Line)> {
        self.lines
            .iter()
            .find_map(|line| line.owner(board).map(|p| (p, line)))
    }

    /// Like [`find_winner`](Self::find_winner) but only over lines through
    /// `position`. Sufficient after a move when the board had no winner before.
    pub fn find_winner_through<'a>(
        &'a self,
        board: &Board,
        position: usize,
    ) -> Option<(Player, &'a Line)> {
        self.lines_through(position)
            .find_map(|line| line.owner(board).map(|p| (p, line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use std::collections::HashSet;

    fn count(catalog: &LineCatalog, direction: Direction) -> usize {
        catalog
            .lines()
            .iter()
            .filter(|l| l.direction() == direction)
            .count()
    }

    #[test]
    fn test_standard_catalog_has_88_lines() {
        let catalog = LineCatalog::generate(GridSpec::STANDARD);
        assert_eq!(catalog.len(), 88);
        assert_eq!(count(&catalog, Direction::Horizontal), 28);
        assert_eq!(count(&catalog, Direction::Vertical), 28);
        assert_eq!(count(&catalog, Direction::Diagonal), 16);
        assert_eq!(count(&catalog, Direction::AntiDiagonal), 16);
    }

    #[test]
    fn test_classic_catalog_matches_tictactoe() {
        let catalog = LineCatalog::generate(GridSpec::CLASSIC);
        let lines: Vec<&[usize]> = catalog.lines().iter().map(|l| l.positions()).collect();
        assert_eq!(
            lines,
            vec![
                &[0, 1, 2][..],
                &[3, 4, 5],
                &[6, 7, 8],
                &[0, 3, 6],
                &[1, 4, 7],
                &[2, 5, 8],
                &[0, 4, 8],
                &[2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_first_line_of_each_direction() {
        let catalog = LineCatalog::standard();
        let first = |d| {
            catalog
                .lines()
                .iter()
                .find(|l| l.direction() == d)
                .unwrap()
                .positions()
                .to_vec()
        };
        assert_eq!(first(Direction::Horizontal), vec![0, 1, 2, 3]);
        assert_eq!(first(Direction::Vertical), vec![0, 7, 14, 21]);
        assert_eq!(first(Direction::Diagonal), vec![0, 8, 16, 24]);
        assert_eq!(first(Direction::AntiDiagonal), vec![3, 9, 15, 21]);
    }

    #[test]
    fn test_no_duplicate_lines() {
        let catalog = LineCatalog::standard();
        let normalized: HashSet<Vec<usize>> = catalog
            .lines()
            .iter()
            .map(|l| {
                let mut p = l.positions().to_vec();
                p.sort_unstable();
                p
            })
            .collect();
        assert_eq!(normalized.len(), catalog.len());
    }

    #[test]
    fn test_expected_line_count_formula() {
        for size in 2..=9 {
            for run in 2..=size {
                let spec = GridSpec::new(size, run).unwrap();
                assert_eq!(
                    LineCatalog::generate(spec).len(),
                    spec.expected_line_count(),
                    "size {size} run {run}"
                );
            }
        }
    }

    #[test]
    fn test_lines_through_corner_and_center() {
        let catalog = LineCatalog::standard();
        // Corner: one horizontal, one vertical, one diagonal
        assert_eq!(catalog.lines_through(0).count(), 3);
        // Center of 7x7 is crossed by 4 runs in each direction
        assert_eq!(catalog.lines_through(24).count(), 16);
        assert!(catalog.lines_through(24).all(|l| l.contains(24)));
        assert_eq!(catalog.lines_through(49).count(), 0);
    }

    #[test]
    fn test_standard_is_shared() {
        let a = LineCatalog::standard();
        let b = LineCatalog::for_spec(GridSpec::STANDARD);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_grid_spec_validation() {
        assert!(GridSpec::new(7, 4).is_ok());
        assert_eq!(GridSpec::new(7, 1), Err(GridError::RunTooShort(1)));
        assert_eq!(
            GridSpec::new(3, 4),
            Err(GridError::RunExceedsGrid {
                size: 3,
                run_length: 4
            })
        );
        assert!(matches!(
            GridSpec::new(27, 4),
            Err(GridError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_find_winner() {
        let catalog = LineCatalog::standard();
        let mut board = Board::new(7);
        for pos in [8, 16, 24] {
            board.set(pos, Cell::O);
        }
        assert!(catalog.find_winner(&board).is_none());

        board.set(32, Cell::O);
        let (player, line) = catalog.find_winner(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.positions(), &[8, 16, 24, 32]);
        assert_eq!(line.direction(), Direction::Diagonal);
        assert!(catalog.find_winner_through(&board, 32).is_some());
        assert!(catalog.find_winner_through(&board, 0).is_none());
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let catalog = LineCatalog::standard();
        let mut board = Board::new(7);
        for pos in [0, 1, 2] {
            board.set(pos, Cell::X);
        }
        board.set(3, Cell::O);
        assert_eq!(catalog.lines()[0].owner(&board), None);
    }
}
