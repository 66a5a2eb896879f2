use crate::game::consts::*;
use crate::prelude::*;

mod candidates;
mod history;
mod printers;
mod state;
mod wins;

pub use history::{Change, Entry, History};
pub use state::GameState;
pub use wins::WinLine;

#[derive(Clone, PartialEq, Eq)]
/// A square gomoku board with a checked and an unchecked mutation surface.
///
/// The board knows nothing about turn order or presentation; it emits a
/// [`Change`] for every mutation and leaves both concerns to its caller.
pub struct Board
{
    /// Cells in row-major order; None marks an open intersection.
    cells: Vec<Option<Side>>,

    /// The board width and height.
    size: usize,

    /// Count of occupied cells, so fullness checks stay constant-time.
    stones: usize,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board {
            cells: vec![None; DEFAULT_SIZE * DEFAULT_SIZE],
            size: DEFAULT_SIZE,
            stones: 0,
        }
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.grid(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.grid(f)
    }
}

impl Board
{
    /// Ensures a cell can take a stone, or returns an error explaining why it can't.
    pub fn check(&self, cell: Cell) -> Result<()>
    {
        if cell.row >= self.size || cell.col >= self.size
        {
            let err = Error::new(Kind::OutOfBounds, format!("Cell {} is outside the {1}x{1} board.", cell, self.size));
            return Err(err);
        }

        if self.get(cell).is_some()
        {
            let err = Error::new(Kind::InvalidMove, format!("Cell {} is already occupied.", cell));
            return Err(err);
        }

        Ok(())
    }

    /// Resets a cell to empty without validation.
    ///
    /// The caller must know the cell is occupied; this is the undo half of the
    /// search's place-recurse-clear triple.
    pub fn clear_unchecked(&mut self, cell: Cell) -> Change
    {
        let index = self.index(cell);
        debug_assert!(self.cells[index].is_some(), "clear of empty cell {}", cell);

        if self.cells[index].take().is_some()
        {
            self.stones -= 1;
        }

        Change::Cleared { cell }
    }

    /// Returns the occupant of a cell, if any.
    pub fn get(&self, cell: Cell) -> Option<Side>
    {
        self.cells[self.index(cell)]
    }

    /// The row-major index of a cell.
    fn index(&self, cell: Cell) -> usize
    {
        cell.row * self.size + cell.col
    }

    /// Whether no stone has been placed yet.
    pub fn is_empty(&self) -> bool
    {
        self.stones == 0
    }

    /// Whether no open intersection remains.
    pub fn is_full(&self) -> bool
    {
        self.stones == self.size * self.size
    }

    /// Whether a stone may be placed on this cell.
    pub fn is_valid_move(&self, cell: Cell) -> bool
    {
        self.check(cell).is_ok()
    }

    /// All open cells, in row-major order.
    pub fn legal_moves(&self) -> Vec<Cell>
    {
        itertools::iproduct!(0..self.size, 0..self.size)
            .map(|(row, col)| Cell { row, col })
            .filter(|cell| self.get(*cell).is_none())
            .collect()
    }

    /// Creates an empty board of the given width.
    pub fn new(size: usize) -> Result<Board>
    {
        if size < MIN_SIZE
        {
            let err = Error::new(
                Kind::InvalidSize,
                format!("A board must be at least {} cells wide, got {}.", MIN_SIZE, size),
            );
            return Err(err);
        }

        Ok(Board {
            cells: vec![None; size * size],
            size,
            stones: 0,
        })
    }

    /// Sets a cell to the given side without validation.
    ///
    /// The caller must have validated the move already; placing onto an
    /// occupied cell is a contract violation, not a recoverable error.
    pub fn place_unchecked(&mut self, cell: Cell, side: Side) -> Change
    {
        let index = self.index(cell);
        debug_assert!(self.cells[index].is_none(), "placement on occupied cell {}", cell);

        if self.cells[index].replace(side).is_none()
        {
            self.stones += 1;
        }

        Change::Placed { cell, side }
    }

    /// Validates and applies a placement.
    pub fn play(&mut self, cell: Cell, side: Side) -> Result<Change>
    {
        self.check(cell)?;
        Ok(self.place_unchecked(cell, side))
    }

    /// The board width and height.
    pub fn size(&self) -> usize
    {
        self.size
    }

    /// The number of stones on the board.
    pub fn stones(&self) -> usize
    {
        self.stones
    }
}
