use itertools::iproduct;

use crate::game::consts::*;
use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The endpoints of a detected five-in-a-row.
///
/// Lines are recomputed on every detection call and are only meaningful for
/// the board contents that produced them.
pub struct WinLine
{
    pub start: Cell,
    pub end:   Cell,
}

impl std::fmt::Display for WinLine
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Board
{
    /// Matches a run of exactly five anchored at start along direction.
    fn exact_run(&self, start: Cell, direction: Direction, side: Side) -> Option<WinLine>
    {
        let size = self.size();

        for step in 0..WIN_LENGTH as isize
        {
            let cell = start.offset(direction, step, size)?;
            if self.get(cell) != Some(side)
            {
                return None;
            }
        }

        // The cells bounding the window must not extend the run.
        for outside in [-1, WIN_LENGTH as isize]
        {
            if let Some(cell) = start.offset(direction, outside, size)
            {
                if self.get(cell) == Some(side)
                {
                    return None;
                }
            }
        }

        let end = start.offset(direction, WIN_LENGTH as isize - 1, size)?;
        Some(WinLine { start, end })
    }

    /// Scans for a winning run of the given side.
    ///
    /// The run must be exactly five stones long: a window only matches when
    /// the cell before it and the cell after it are off the board or belong
    /// to the other side, so an overline of six or more is not a win.
    pub fn winning_line(&self, side: Side) -> Option<WinLine>
    {
        iproduct!(0..self.size(), 0..self.size())
            .map(|(row, col)| Cell { row, col })
            .flat_map(|cell| Direction::all().into_iter().map(move |direction| (cell, direction)))
            .find_map(|(cell, direction)| self.exact_run(cell, direction, side))
    }
}
