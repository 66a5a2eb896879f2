use arrayvec::ArrayVec;
use itertools::iproduct;
use rand::{rngs::StdRng, Rng};

use crate::game::consts::*;
use crate::prelude::*;

/// One five-cell window of board contents.
type Window = ArrayVec<Option<Side>, { WIN_LENGTH }>;

/// Scores a board for the engine at the given difficulty tier.
///
/// Pure in the board: only the injected generator advances, and only on the
/// tiers that draw noise at all.
pub fn evaluate(board: &Board, difficulty: Difficulty, rng: &mut StdRng) -> i32
{
    let mut score = 0;

    for_each_window(board, |window| {
        let shape = Shape::of(window);
        score += match difficulty
        {
            | Difficulty::Easy => score_easy(&shape),
            | Difficulty::Medium => score_medium(&shape),
            | Difficulty::Hard => score_hard(&shape),
        };
    });

    if difficulty == Difficulty::Hard
    {
        score += centrality(board);
    }

    let noise = difficulty.eval_noise();
    if noise > 0
    {
        score += rng.gen_range(-noise..=noise);
    }

    score
}

/// A small positional bonus for engine stones near the centre.
fn centrality(board: &Board) -> i32
{
    let size = board.size();
    let center = (size / 2) as isize;
    let mut bonus = 0;

    for (row, col) in iproduct!(0..size, 0..size)
    {
        if board.get(Cell { row, col }) != Some(Side::Engine)
        {
            continue;
        }

        let distance = (row as isize - center).abs().max((col as isize - center).abs());

        // Floor division keeps the far-from-centre penalty on oversized boards.
        bonus += (5 - distance as i32).div_euclid(2);
    }

    bonus
}

/// Visits every five-cell window in all four orientations.
fn for_each_window(board: &Board, mut visit: impl FnMut(&Window))
{
    let size = board.size();

    for direction in Direction::all()
    {
        for (row, col) in iproduct!(0..size, 0..size)
        {
            let start = Cell { row, col };
            let mut window = Window::new();

            for step in 0..WIN_LENGTH as isize
            {
                match start.offset(direction, step, size)
                {
                    | Some(cell) => window.push(board.get(cell)),
                    | None => break,
                }
            }

            if window.len() == WIN_LENGTH
            {
                visit(&window);
            }
        }
    }
}

/// The offense-only tier: the engine's own shapes score, nothing else does.
fn score_easy(shape: &Shape) -> i32
{
    match (shape.engine, shape.empty())
    {
        | (5, _) => 100,
        | (4, 1) => 10,
        | (3, 2) => 5,
        | _ => 0,
    }
}

/// The full table with open-end splits, mirrored for the opponent.
fn score_hard(shape: &Shape) -> i32
{
    fn table(own: usize, other: usize, shape: &Shape) -> i32
    {
        if other > 0
        {
            return 0;
        }

        match own
        {
            | 5 => 10000,
            | 4 =>
            {
                if shape.open_either()
                {
                    1000
                }
                else
                {
                    500
                }
            }
            | 3 =>
            {
                if shape.open_both()
                {
                    200
                }
                else
                {
                    50
                }
            }
            | 2 =>
            {
                if shape.open_both()
                {
                    10
                }
                else
                {
                    5
                }
            }
            | _ => 0,
        }
    }

    table(shape.engine, shape.human, shape) - table(shape.human, shape.engine, shape)
}

/// The balanced tier: own shapes score up, dangerous opposing shapes down.
fn score_medium(shape: &Shape) -> i32
{
    match (shape.engine, shape.human, shape.empty())
    {
        | (5, _, _) => 1000,
        | (4, 0, 1) => 100,
        | (3, 0, 2) => 10,
        | (2, 0, 3) => 1,
        | (0, 4, 1) => -100,
        | (0, 3, 2) => -10,
        | _ => 0,
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Occupancy summary of a window, seen from the engine's side.
struct Shape
{
    engine:     usize,
    human:      usize,
    open_start: bool,
    open_end:   bool,
}

impl Shape
{
    /// The number of open cells in the window.
    fn empty(&self) -> usize
    {
        WIN_LENGTH - self.engine - self.human
    }

    /// Summarizes a window.
    fn of(window: &Window) -> Shape
    {
        Shape {
            engine:     window.iter().filter(|cell| **cell == Some(Side::Engine)).count(),
            human:      window.iter().filter(|cell| **cell == Some(Side::Human)).count(),
            open_start: window[0].is_none(),
            open_end:   window[WIN_LENGTH - 1].is_none(),
        }
    }

    /// Whether both window ends are open.
    fn open_both(&self) -> bool
    {
        self.open_start && self.open_end
    }

    /// Whether at least one window end is open.
    fn open_either(&self) -> bool
    {
        self.open_start || self.open_end
    }
}
