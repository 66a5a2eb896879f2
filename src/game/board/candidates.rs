use std::collections::HashSet;

use itertools::iproduct;

use crate::prelude::*;

impl Board
{
    /// Returns the cells worth searching: open neighbours of existing stones.
    ///
    /// An untouched board yields the single centre cell. A position whose
    /// stones have no open neighbourhood at all falls back to the full
    /// enumeration, which only happens on degenerate near-full boards.
    pub fn candidate_moves(&self) -> Vec<Cell>
    {
        if self.is_empty()
        {
            let center = self.size() / 2;
            return vec![Cell { row: center, col: center }];
        }

        let mut seen: HashSet<Cell> = HashSet::new();
        let mut moves: Vec<Cell> = Vec::new();

        for (row, col) in iproduct!(0..self.size(), 0..self.size())
        {
            let cell = Cell { row, col };
            if self.get(cell).is_none()
            {
                continue;
            }

            for (dr, dc) in iproduct!(-1isize..=1, -1isize..=1)
            {
                if dr == 0 && dc == 0
                {
                    continue;
                }

                let Some(neighbour) = cell.shift(dr, dc, self.size())
                else
                {
                    continue;
                };

                if self.get(neighbour).is_none() && seen.insert(neighbour)
                {
                    moves.push(neighbour);
                }
            }
        }

        if moves.is_empty()
        {
            return self.legal_moves();
        }

        moves
    }
}
