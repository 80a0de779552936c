use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIDE, CELL_COUNT, Cell, Player};

/// Row-major 3x3 grid, `index = row * 3 + col`.
///
/// `Board` is `Copy`: every hypothetical move is made on a fresh copy via
/// [`Board::with_mark`], so searching never touches the caller's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = player.cell();
        next
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// The same position seen from the other side of the table.
    pub fn swapped(&self) -> Board {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.swapped();
        }
        Board { cells }
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Cell::Empty)
}

impl TryFrom<&[Cell]> for Board {
    type Error = String;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| {
            format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT,
                cells.len()
            )
        })?;
        Ok(Board { cells })
    }
}

impl FromStr for Board {
    type Err = String;

    /// Accepts nine cell symbols; `/` and whitespace are treated as row
    /// separators and ignored, so `"X.O/.O./X.."` works as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for symbol in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let cell = Cell::from_symbol(symbol)
                .ok_or_else(|| format!("Unknown cell symbol '{}'", symbol))?;
            cells.push(cell);
        }
        Board::try_from(cells.as_slice())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
