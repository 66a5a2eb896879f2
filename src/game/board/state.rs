use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    NotStarted,
    InProgress,
    Draw,
    HumanWins,
    EngineWins,
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::NotStarted => "NotStarted",
            | Self::InProgress => "InProgress",
            | Self::Draw => "Draw",
            | Self::HumanWins => "HumanWins",
            | Self::EngineWins => "EngineWins",
        };
        write!(f, "{repr}")
    }
}

impl Board
{
    /// Computes the state of the game from the stones alone.
    ///
    /// Wins take precedence over fullness, so a board whose last stone both
    /// fills and finishes reports the win.
    pub fn state(&self) -> GameState
    {
        if self.is_empty()
        {
            return GameState::NotStarted;
        }

        if self.winning_line(Side::Engine).is_some()
        {
            return GameState::EngineWins;
        }

        if self.winning_line(Side::Human).is_some()
        {
            return GameState::HumanWins;
        }

        if self.is_full()
        {
            GameState::Draw
        }
        else
        {
            GameState::InProgress
        }
    }
}
