pub(crate) mod board;
pub mod cell;
pub mod direction;
pub mod side;

pub use board::{Board, Change, Entry, GameState, History, WinLine};
pub use cell::Cell;
pub use direction::Direction;
pub use side::Side;

pub mod consts
{
    /// The number of contiguous stones that decides a game.
    pub const WIN_LENGTH: usize = 5;

    /// The board width used when the caller does not pick one.
    pub const DEFAULT_SIZE: usize = 10;

    /// The smallest board that can hold a winning run.
    pub const MIN_SIZE: usize = WIN_LENGTH;
}
