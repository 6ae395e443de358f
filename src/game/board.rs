use super::participant::{Participant, Team};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WINNING_LENGTH: usize = 4;

/// A board cell records which participant's piece occupies it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Participant),
}

impl Cell {
    pub fn participant(self) -> Option<Participant> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(participant) => Some(participant),
        }
    }

    /// Color the piece in this cell counts as, if occupied
    pub fn piece_color(self) -> Option<Team> {
        self.participant().map(Participant::piece_color)
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Directions a run is read in, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// (row step, column step)
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// Whether a run starting at (row, col) stays on the board
    fn fits(self, row: usize, col: usize) -> bool {
        let fits_down = row + WINNING_LENGTH <= ROWS;
        match self {
            Direction::Right => col + WINNING_LENGTH <= COLS,
            Direction::Down => fits_down,
            Direction::DownRight => fits_down && col + WINNING_LENGTH <= COLS,
            Direction::DownLeft => fits_down && col >= WINNING_LENGTH - 1,
        }
    }
}

/// A line of `WINNING_LENGTH` cells sharing one piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningRun {
    /// Occupant of the first cell of the run
    pub participant: Participant,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl WinningRun {
    /// Piece color the run was made of
    pub fn color(&self) -> Team {
        self.participant.piece_color()
    }

    /// Coordinates of every cell in the run
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        run_cells(self.row, self.col, self.direction)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}

fn run_cells(row: usize, col: usize, direction: Direction) -> impl Iterator<Item = (usize, usize)> {
    let (dr, dc) = direction.delta();
    (0..WINNING_LENGTH as isize).map(move |step| {
        (
            (row as isize + dr * step) as usize,
            (col as isize + dc * step) as usize,
        )
    })
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
        !self.cells[0][col].is_empty()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, participant: Participant) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col].is_empty() {
                self.cells[row][col] = Cell::Occupied(participant);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull { column: col })
    }

    /// Empty a cell, returning what was there
    pub fn clear(&mut self, row: usize, col: usize) -> Cell {
        std::mem::replace(&mut self.cells[row][col], Cell::Empty)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Scan the whole board for a line of matching piece colors.
    ///
    /// Cells are visited top to bottom, left to right, and each occupied cell
    /// is tried as the start of a run in every [`Direction`] in order. The
    /// first complete run found is returned. Runs compare piece color only,
    /// so a spy's piece extends the enemy's line.
    pub fn winning_run(&self) -> Option<WinningRun> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let Cell::Occupied(participant) = self.cells[row][col] else {
                    continue;
                };
                let color = participant.piece_color();

                for direction in Direction::ALL {
                    if !direction.fits(row, col) {
                        continue;
                    }
                    let complete = run_cells(row, col, direction)
                        .all(|(r, c)| self.cells[r][c].piece_color() == Some(color));
                    if complete {
                        return Some(WinningRun {
                            participant,
                            row,
                            col,
                            direction,
                        });
                    }
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
