#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The two sides of a game: the human and the engine it plays against.
pub enum Side
{
    Human = 0,
    Engine = 1,
}

impl Side
{
    /// Gets the other side.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::Human => Self::Engine,
            | Self::Engine => Self::Human,
        }
    }

    // Returns the one-glyph name for this side, for use in board prints.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::Human => "X",
            | Self::Engine => "O",
        }
    }
}

impl std::fmt::Display for Side
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Human => "Human",
            | Self::Engine => "Engine",
        };
        write!(f, "{name}")
    }
}
