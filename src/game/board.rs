use super::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of consecutive markers needed to win
pub const WIN_LENGTH: usize = 4;

/// Coordinates `(row, col)` of a completed four-in-a-row, in scan order.
pub type WinningLine = [(usize, usize); WIN_LENGTH];

/// Row/column steps for the four line orientations: horizontal, vertical,
/// diagonal `\` and diagonal `/`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// A full or out-of-range column leaves the board untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Check whether `cell` has four in a row anywhere on the board
    pub fn has_four_in_a_row(&self, cell: Cell) -> bool {
        self.winning_line(cell).is_some()
    }

    /// Find the first run of four `cell` markers, scanning every starting
    /// position in each orientation.
    pub fn winning_line(&self, cell: Cell) -> Option<WinningLine> {
        if cell == Cell::Empty {
            return None;
        }

        for row in 0..ROWS {
            for col in 0..COLS {
                for &(dr, dc) in &DIRECTIONS {
                    let Some(line) = Self::line_from(row, col, dr, dc) else {
                        continue;
                    };
                    if line.iter().all(|&(r, c)| self.cells[r][c] == cell) {
                        return Some(line);
                    }
                }
            }
        }

        None
    }

    /// Coordinates of the four cells starting at (row, col) along (dr, dc),
    /// or `None` if the run would leave the board.
    fn line_from(row: usize, col: usize, dr: isize, dc: isize) -> Option<WinningLine> {
        let mut line = [(0, 0); WIN_LENGTH];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row as isize + dr * step as isize;
            let c = col as isize + dc * step as isize;
            if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
                return None;
            }
            *slot = (r as usize, c as usize);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
