mod common;
use common::*;

use gobang::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn rng() -> StdRng
{
    StdRng::seed_from_u64(0)
}

#[cfg(test)]
mod evaluate
{
    use super::*;

    #[test]
    fn hard_scores_an_empty_board_at_zero()
    {
        let _setup = setup::setup();
        let board = Board::new(10).unwrap();

        assert_eq!(evaluate(&board, Difficulty::Hard, &mut rng()), 0);
    }

    #[test]
    fn easy_and_medium_only_jitter_an_empty_board()
    {
        let _setup = setup::setup();
        let board = Board::new(10).unwrap();

        let easy = evaluate(&board, Difficulty::Easy, &mut rng());
        assert!((-5..=5).contains(&easy));

        let medium = evaluate(&board, Difficulty::Medium, &mut rng());
        assert!((-3..=3).contains(&medium));
    }

    #[test]
    fn easy_ignores_the_opposing_stones()
    {
        // The easy tier is offense-only: a board holding nothing but human
        // stones scores as pure noise.
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        templates::place_all(&mut board, Side::Human, &[(4, 2), (4, 3), (4, 4), (4, 5)]);

        let score = evaluate(&board, Difficulty::Easy, &mut rng());
        assert!((-5..=5).contains(&score));
    }

    #[test]
    fn medium_totals_the_window_table()
    {
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        templates::place_all(&mut board, Side::Engine, &[(4, 2), (4, 3), (4, 4), (4, 5)]);

        // Row windows: 10 + 100 + 100 + 10 + 1, then up to 3 points of noise.
        let score = evaluate(&board, Difficulty::Medium, &mut rng());
        assert!((218..=224).contains(&score));
    }

    #[test]
    fn medium_penalizes_an_opposing_four()
    {
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        templates::place_all(&mut board, Side::Human, &[(4, 2), (4, 3), (4, 4), (4, 5)]);

        let score = evaluate(&board, Difficulty::Medium, &mut rng());
        assert!(score < -100);
    }

    #[test]
    fn hard_rewards_central_stones()
    {
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        board.play(templates::cell(5, 5), Side::Engine).unwrap();

        assert_eq!(evaluate(&board, Difficulty::Hard, &mut rng()), 2);
    }

    #[test]
    fn hard_prefers_open_fours_to_blocked_ones()
    {
        let _setup = setup::setup();
        let mut open = Board::new(10).unwrap();
        templates::place_all(&mut open, Side::Engine, &[(4, 2), (4, 3), (4, 4), (4, 5)]);

        let mut blocked = open.clone();
        templates::place_all(&mut blocked, Side::Human, &[(4, 1), (4, 6)]);

        let open_score = evaluate(&open, Difficulty::Hard, &mut rng());
        let blocked_score = evaluate(&blocked, Difficulty::Hard, &mut rng());
        assert!(open_score > blocked_score);
    }

    #[test]
    fn hard_mirrors_the_table_for_the_opponent()
    {
        let _setup = setup::setup();
        let mut engine = Board::new(10).unwrap();
        templates::place_all(&mut engine, Side::Engine, &[(0, 0), (0, 1), (0, 2)]);

        let mut human = Board::new(10).unwrap();
        templates::place_all(&mut human, Side::Human, &[(0, 0), (0, 1), (0, 2)]);

        // The same shape swaps sign. The corner stones sit five cells from
        // the centre, so the engine-only centrality bonus contributes nothing.
        let for_engine = evaluate(&engine, Difficulty::Hard, &mut rng());
        let against = evaluate(&human, Difficulty::Hard, &mut rng());
        assert_eq!(for_engine, -against);
    }

    #[test]
    fn the_evaluator_leaves_the_board_alone()
    {
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        templates::place_all(&mut board, Side::Engine, &[(4, 4), (5, 5)]);

        let before = board.clone();
        evaluate(&board, Difficulty::Hard, &mut rng());
        assert_eq!(board, before);
    }
}
