use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// A difficulty tier: a search depth bundled with a randomization policy.
///
/// Easy and Medium jitter both their evaluations and their root scores;
/// Hard plays straight.
pub enum Difficulty
{
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty
{
    /// The search depth remaining after the root ply.
    pub fn depth(&self) -> u8
    {
        match self
        {
            | Self::Easy => 1,
            | Self::Medium | Self::Hard => 2,
        }
    }

    /// Half-width of the noise added to every evaluator call.
    pub fn eval_noise(&self) -> i32
    {
        match self
        {
            | Self::Easy => 5,
            | Self::Medium => 3,
            | Self::Hard => 0,
        }
    }

    /// Half-width of the jitter added to each root candidate's score.
    pub fn root_jitter(&self) -> i32
    {
        match self
        {
            | Self::Easy => 100,
            | Self::Medium => 30,
            | Self::Hard => 0,
        }
    }
}

impl std::fmt::Display for Difficulty
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Easy => "Easy",
            | Self::Medium => "Medium",
            | Self::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Easy" | "easy" => Ok(Self::Easy),
            | "Medium" | "medium" => Ok(Self::Medium),
            | "Hard" | "hard" => Ok(Self::Hard),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
