use std::time::Instant;

use rand::{seq::SliceRandom, Rng};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The unified result of a search node: a score and the move that earned it.
pub struct SearchResult
{
    pub best:  Option<Cell>,
    pub score: i32,
}

impl Agent
{
    /// Picks the engine's move, or None when the position has no continuations.
    ///
    /// Candidates are shuffled before scoring, and the weaker tiers add jitter
    /// on top, so equal-scoring moves vary from game to game.
    pub fn best_move(&mut self, board: &mut Board, difficulty: Difficulty) -> Option<Cell>
    {
        let started = Instant::now();
        self.leaves = 0;
        self.stems = 0;

        let mut candidates = board.candidate_moves();

        if candidates.is_empty()
        {
            return None;
        }

        // Forced situations skip the search entirely.
        if candidates.len() == 1
        {
            return Some(candidates[0]);
        }

        if let Some(cell) = self.five_in_one(board, &candidates, Side::Engine)
        {
            return Some(cell);
        }

        if let Some(cell) = self.five_in_one(board, &candidates, Side::Human)
        {
            return Some(cell);
        }

        candidates.shuffle(&mut self.rng);

        let depth = difficulty.depth();
        let jitter = difficulty.root_jitter();

        let mut best: Option<Cell> = None;
        let mut best_score = -INF;

        for cell in candidates
        {
            board.place_unchecked(cell, Side::Engine);
            let result = self.minimax(board, difficulty, depth, -INF, INF, false);
            board.clear_unchecked(cell);

            let mut score = result.score;
            if jitter > 0
            {
                score += self.rng.gen_range(-jitter..=jitter);
            }

            if score > best_score
            {
                best_score = score;
                best = Some(cell);
            }
        }

        if let Some(cell) = best
        {
            let elapsed = started.elapsed();
            log::debug!("found {: ^8}: scored {: >6}", cell, best_score);
            log::debug!("took {:.1}s over {} stems and {} leaves", elapsed.as_secs_f64(), self.stems, self.leaves);
        }

        best
    }

    /// Finds a candidate that finishes a five for the given side, if one exists.
    ///
    /// Checked for both sides before searching, so a finishing move is always
    /// taken and an opposing finisher always blocked.
    fn five_in_one(&self, board: &mut Board, candidates: &[Cell], side: Side) -> Option<Cell>
    {
        for cell in candidates
        {
            board.place_unchecked(*cell, side);
            let decided = board.winning_line(side).is_some();
            board.clear_unchecked(*cell);

            if decided
            {
                return Some(*cell);
            }
        }

        None
    }

    /// Depth-first minimax with alpha-beta cutoffs.
    ///
    /// Every candidate is a place-recurse-clear triple; the clear runs before
    /// any score bookkeeping, so the board is restored on every path out,
    /// including cutoff breaks.
    fn minimax(&mut self, board: &mut Board, difficulty: Difficulty, depth: u8, alpha: i32, beta: i32, maximizing: bool) -> SearchResult
    {
        if board.winning_line(Side::Engine).is_some()
        {
            return SearchResult {
                best:  None,
                score: win_score(depth),
            };
        }

        if board.winning_line(Side::Human).is_some()
        {
            return SearchResult {
                best:  None,
                score: -win_score(depth),
            };
        }

        if board.is_full() || depth == 0
        {
            self.leaves += 1;
            return SearchResult {
                best:  None,
                score: evaluate(board, difficulty, &mut self.rng),
            };
        }

        self.stems += 1;

        let side = if maximizing { Side::Engine } else { Side::Human };
        let mut alpha = alpha;
        let mut beta = beta;
        let mut best: Option<Cell> = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for cell in board.candidate_moves()
        {
            board.place_unchecked(cell, side);
            let result = self.minimax(board, difficulty, depth - 1, alpha, beta, !maximizing);
            board.clear_unchecked(cell);

            if maximizing
            {
                if result.score > best_score
                {
                    best_score = result.score;
                    best = Some(cell);
                }
                alpha = alpha.max(result.score);
            }
            else
            {
                if result.score < best_score
                {
                    best_score = result.score;
                    best = Some(cell);
                }
                beta = beta.min(result.score);
            }

            if beta <= alpha
            {
                break;
            }
        }

        SearchResult {
            best,
            score: best_score,
        }
    }
}
