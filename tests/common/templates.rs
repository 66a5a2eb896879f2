use gobang::prelude::*;

/// A cell literal.
pub fn cell(row: usize, col: usize) -> Cell
{
    Cell { row, col }
}

/// Builds a board from one string per row: '.' open, 'X' human, 'O' engine.
pub fn board_from_rows(rows: &[&str]) -> Board
{
    let mut board = Board::new(rows.len()).unwrap();

    for (row, line) in rows.iter().enumerate()
    {
        for (col, glyph) in line.chars().enumerate()
        {
            let side = match glyph
            {
                | 'X' => Side::Human,
                | 'O' => Side::Engine,
                | _ => continue,
            };

            board.play(cell(row, col), side).unwrap();
        }
    }

    board
}

/// Places a run of stones for one side.
pub fn place_all(board: &mut Board, side: Side, cells: &[(usize, usize)])
{
    for (row, col) in cells
    {
        board.play(cell(*row, *col), side).unwrap();
    }
}

/// An agent whose shuffles and jitters replay identically.
pub fn seeded_agent() -> Agent
{
    Agent::new(Some(0xACE5))
}
