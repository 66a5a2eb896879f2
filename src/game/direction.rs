#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The four scan orientations on a square board.
///
/// Each orientation also covers its reverse, so four are enough to visit
/// every line of cells exactly once.
pub enum Direction
{
    East,
    South,
    SouthEast,
    SouthWest,
}

impl Direction
{
    /// All four orientations, in scan order.
    pub fn all() -> [Direction; 4]
    {
        [Direction::East, Direction::South, Direction::SouthEast, Direction::SouthWest]
    }

    /// The row and column deltas of a single step.
    pub fn delta(&self) -> (isize, isize)
    {
        match self
        {
            | Self::East => (0, 1),
            | Self::South => (1, 0),
            | Self::SouthEast => (1, 1),
            | Self::SouthWest => (1, -1),
        }
    }
}
