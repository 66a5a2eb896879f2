use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A row-column coordinate on the board.
pub struct Cell
{
    pub row: usize,
    pub col: usize,
}

impl Cell
{
    /// Steps along a direction, or None once the step leaves a size-wide board.
    pub fn offset(&self, direction: Direction, steps: isize, size: usize) -> Option<Cell>
    {
        let (dr, dc) = direction.delta();
        self.shift(dr * steps, dc * steps, size)
    }

    /// Applies raw row and column deltas, or None once they leave a size-wide board.
    pub fn shift(&self, dr: isize, dc: isize, size: usize) -> Option<Cell>
    {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        let bound = 0..size as isize;

        if bound.contains(&row) && bound.contains(&col)
        {
            Some(Cell {
                row: row as usize,
                col: col as usize,
            })
        }
        else
        {
            None
        }
    }
}

impl std::fmt::Display for Cell
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Cell
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let re = Regex::new(r"^\s*(?<r>[0-9]+)\s*,\s*(?<c>[0-9]+)\s*$").unwrap();
        let Some(caps) = re.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let row_str = caps.name("r").map(|m| m.as_str()).unwrap_or_default();
        let Ok(row) = row_str.parse::<usize>()
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let col_str = caps.name("c").map(|m| m.as_str()).unwrap_or_default();
        let Ok(col) = col_str.parse::<usize>()
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        Ok(Cell { row, col })
    }
}
