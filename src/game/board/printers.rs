use crate::prelude::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board {{ size: {}, stones: {} }}", self.size(), self.stones())
    }

    /// Pretty print: one line per row, dots for open intersections.
    pub(super) fn grid(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let rows = (0..self.size())
            .map(|row| {
                (0..self.size())
                    .map(|col| match self.get(Cell { row, col })
                    {
                        | Some(side) => side.short(),
                        | None => ".",
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>();

        write!(f, "{}", rows.join("\n"))
    }
}
