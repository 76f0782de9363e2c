use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Square grid of `size * size` cells stored row-major.
///
/// Position `row * size + col` addresses the cell at (row, col); row 0 is the
/// top of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given side length
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (always `size * size`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Flat position of (row, col)
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// (row, col) of a flat position
    pub fn coords(&self, position: usize) -> (usize, usize) {
        (position / self.size, position % self.size)
    }

    /// Get the cell at a flat position, `None` when out of range
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Get the cell at (row, col). Panics when outside the grid.
    pub fn get_at(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.size && col < self.size, "({row}, {col}) outside grid");
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, position: usize, cell: Cell) {
        self.cells[position] = cell;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Positions that can still be played
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Build a board from cells laid out row-major. Returns `None` unless
    /// `cells.len()` is a perfect square.
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        let size = (cells.len() as f64).sqrt() as usize;
        if size * size != cells.len() {
            return None;
        }
        Some(Board { size, cells })
    }
}
