use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A presentation-free diff describing one board mutation.
///
/// Renderers animate from these; the board itself holds no visual state.
pub enum Change
{
    Placed
    {
        cell: Cell, side: Side
    },
    Cleared
    {
        cell: Cell
    },
}

impl std::fmt::Display for Change
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::Placed { cell, side } => write!(f, "{} placed at {}", side, cell),
            | Self::Cleared { cell } => write!(f, "cleared {}", cell),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One accepted placement in the session record.
pub struct Entry
{
    pub cell: Cell,
    pub side: Side,
}

#[derive(Clone, Debug, Default)]
/// A linear record of placements.
///
/// The record belongs to the controlling session, not the board: the engine
/// core never reads it, and it only drives undo and turn alternation.
pub struct History
{
    past: Vec<Entry>,
}

impl History
{
    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// A read-only iter over past placements.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry>
    {
        self.past.iter()
    }

    /// Gets the length of the history, which is useful for controlling undos.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// Records a placement.
    pub fn play(&mut self, entry: Entry)
    {
        self.past.push(entry);
    }

    /// Gets the last placement in this line, if one exists.
    pub fn prev(&self) -> Option<Entry>
    {
        self.past.last().copied()
    }

    /// The turn number is the number of moves already played.
    ///
    /// A new game therefore begins at 0.
    pub fn turn(&self) -> usize
    {
        self.past.len()
    }

    /// Steps backward in the history if possible.
    pub fn undo(&mut self) -> Option<Entry>
    {
        self.past.pop()
    }
}
