mod common;
use common::*;

use gobang::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Plain minimax with no cutoffs, as a reference for the pruned search.
fn exhaustive(board: &mut Board, depth: u8, maximizing: bool) -> i32
{
    if board.winning_line(Side::Engine).is_some()
    {
        return win_score(depth);
    }

    if board.winning_line(Side::Human).is_some()
    {
        return -win_score(depth);
    }

    if board.is_full() || depth == 0
    {
        let mut rng = StdRng::seed_from_u64(0);
        return evaluate(board, Difficulty::Hard, &mut rng);
    }

    let side = if maximizing { Side::Engine } else { Side::Human };
    let mut best = if maximizing { -INF } else { INF };

    for cell in board.candidate_moves()
    {
        board.place_unchecked(cell, side);
        let score = exhaustive(board, depth - 1, !maximizing);
        board.clear_unchecked(cell);

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}

#[cfg(test)]
mod search
{
    use super::*;

    #[test]
    fn an_empty_board_opens_at_the_centre()
    {
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        let mut agent = templates::seeded_agent();

        let choice = agent.best_move(&mut board, Difficulty::Easy);
        assert_eq!(choice, Some(templates::cell(5, 5)));
    }

    #[test]
    fn a_four_gets_completed()
    {
        let _setup = setup::setup();

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        {
            let mut board = Board::new(10).unwrap();
            templates::place_all(&mut board, Side::Engine, &[(0, 0), (0, 1), (0, 2), (0, 3)]);

            let mut agent = templates::seeded_agent();
            let choice = agent.best_move(&mut board, difficulty);
            assert_eq!(choice, Some(templates::cell(0, 4)), "at {}", difficulty);
        }
    }

    #[test]
    fn an_opposing_open_four_gets_blocked()
    {
        let _setup = setup::setup();

        for difficulty in [Difficulty::Medium, Difficulty::Hard]
        {
            let mut board = Board::new(10).unwrap();
            templates::place_all(&mut board, Side::Human, &[(2, 2), (2, 3), (2, 4), (2, 5)]);

            let mut agent = templates::seeded_agent();
            let choice = agent.best_move(&mut board, difficulty).unwrap();
            assert!(
                choice == templates::cell(2, 1) || choice == templates::cell(2, 6),
                "expected a blocking move at {}, got {}",
                difficulty,
                choice
            );
        }
    }

    #[test]
    fn a_single_opening_is_forced_at_every_depth()
    {
        let _setup = setup::setup();

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        {
            let mut board = templates::board_from_rows(&["XXOXO", "OOXOX", "XXOXO", "OOXOX", "XXOX."]);
            assert_eq!(board.candidate_moves(), vec![templates::cell(4, 4)]);

            let mut agent = templates::seeded_agent();
            let choice = agent.best_move(&mut board, difficulty);
            assert_eq!(choice, Some(templates::cell(4, 4)), "at {}", difficulty);
        }
    }

    #[test]
    fn a_full_board_yields_no_move()
    {
        let _setup = setup::setup();
        let mut board = templates::board_from_rows(&["XXOXO", "OOXOX", "XXOXO", "OOXOX", "XXOXO"]);

        let mut agent = templates::seeded_agent();
        assert_eq!(agent.best_move(&mut board, Difficulty::Medium), None);
    }

    #[test]
    fn chosen_moves_are_always_legal()
    {
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        templates::place_all(&mut board, Side::Human, &[(4, 4), (5, 5)]);
        templates::place_all(&mut board, Side::Engine, &[(4, 5)]);

        let mut agent = templates::seeded_agent();
        let choice = agent.best_move(&mut board, Difficulty::Medium).unwrap();

        assert!(board.legal_moves().contains(&choice));
        assert!(board.is_valid_move(choice));
    }

    #[test]
    fn the_search_restores_the_board()
    {
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        templates::place_all(&mut board, Side::Human, &[(4, 4), (3, 3)]);
        templates::place_all(&mut board, Side::Engine, &[(5, 5)]);

        let before = board.clone();
        let mut agent = templates::seeded_agent();
        agent.best_move(&mut board, Difficulty::Hard);

        assert_eq!(board, before);
    }

    #[test]
    fn pruning_never_changes_the_decision()
    {
        // Alpha-beta buys time, not different moves: the chosen candidate has
        // to carry the same full-width minimax value as the best one.
        let _setup = setup::setup();
        let mut board = Board::new(10).unwrap();
        templates::place_all(&mut board, Side::Engine, &[(4, 4), (4, 5)]);
        templates::place_all(&mut board, Side::Human, &[(5, 4), (5, 5)]);

        let mut agent = templates::seeded_agent();
        let choice = agent.best_move(&mut board, Difficulty::Hard).unwrap();

        let depth = Difficulty::Hard.depth();
        let mut best_value = -INF;
        for cell in board.candidate_moves()
        {
            board.place_unchecked(cell, Side::Engine);
            let value = exhaustive(&mut board, depth, false);
            board.clear_unchecked(cell);

            best_value = best_value.max(value);
        }

        board.place_unchecked(choice, Side::Engine);
        let chosen_value = exhaustive(&mut board, depth, false);
        board.clear_unchecked(choice);

        assert_eq!(chosen_value, best_value);
    }

    #[test]
    fn seeded_agents_replay_the_same_game()
    {
        let _setup = setup::setup();
        let mut first_board = Board::new(10).unwrap();
        templates::place_all(&mut first_board, Side::Human, &[(4, 4), (3, 3)]);
        templates::place_all(&mut first_board, Side::Engine, &[(5, 5)]);
        let mut second_board = first_board.clone();

        let mut first = Agent::new(Some(99));
        let mut second = Agent::new(Some(99));

        assert_eq!(
            first.best_move(&mut first_board, Difficulty::Medium),
            second.best_move(&mut second_board, Difficulty::Medium)
        );
    }
}
