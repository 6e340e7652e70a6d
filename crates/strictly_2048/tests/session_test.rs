//! Tests for the 2048 session lifecycle.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use strictly_2048::{
    Board, Direction, GameActive, GameError, GameResult, GameRules, GameSetup, Session,
    check_invariants, is_terminal,
};

fn session_from(cells: [[u32; 4]; 4], score: u64) -> Session {
    Session::from_parts(Board::from_cells(cells).unwrap(), score, GameRules::default()).unwrap()
}

#[test]
fn test_single_tile_moves_right_and_spawns() {
    let mut rng = StdRng::seed_from_u64(10);
    let session = session_from([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 0);

    let next = session.apply_move(Direction::Right, &mut rng).unwrap();
    let snapshot = next.snapshot();

    assert_eq!(snapshot.board().get(0, 3), Some(2));
    assert_eq!(snapshot.board().tile_count(), 2);
    assert_eq!(snapshot.score(), 0);
    assert!(!snapshot.terminal());
}

#[test]
fn test_noop_move_touches_nothing() {
    let mut rng = StdRng::seed_from_u64(20);
    let mut untouched = rng.clone();
    let session = session_from([[2, 4, 8, 0], [4, 0, 0, 0], [0; 4], [0; 4]], 12);

    let next = session.apply_move(Direction::Left, &mut rng).unwrap();

    assert_eq!(next, session);
    // The spawner was never asked for randomness.
    assert_eq!(rng.next_u64(), untouched.next_u64());
}

#[test]
fn test_score_accumulates_merge_values() {
    let mut rng = StdRng::seed_from_u64(30);
    let session = session_from([[4, 4, 8, 8], [2, 2, 0, 0], [0; 4], [0; 4]], 8);

    let next = session.apply_move(Direction::Left, &mut rng).unwrap();

    assert_eq!(next.score(), 8 + 8 + 16 + 4);
    assert_eq!(next.board().cells()[0], [8, 16, 0, 0]);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(&mut rng);
        for direction in Direction::ALL.iter().cycle().take(200) {
            session = session.apply_move(*direction, &mut rng).unwrap();
        }
        session
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn test_full_game_reaches_terminal() {
    let mut rng = StdRng::seed_from_u64(2048);
    let mut game = match GameSetup::new().start(&mut rng) {
        GameResult::Active(game) => game,
        GameResult::Over(_) => panic!("Fresh game cannot be over"),
    };

    let mut last_score = 0;
    for _ in 0..100_000 {
        let options = game.available_directions();
        assert!(!options.is_empty(), "Active game must have a move");
        let direction = options[(rng.next_u32() as usize) % options.len()];

        let tiles_before = game.board().tile_count();
        match game.make_move(direction, &mut rng).unwrap() {
            GameResult::Active(next) => {
                assert!(next.score() >= last_score);
                assert!(next.board().tile_count() <= tiles_before + 1);
                assert!(check_invariants(&next).is_ok());
                last_score = next.score();
                game = next;
            }
            GameResult::Over(over) => {
                assert!(is_terminal(over.board()));
                assert!(over.board().is_full());
                assert!(over.score() >= last_score);
                assert!(check_invariants(&over).is_ok());
                return;
            }
        }
    }
    panic!("Random play did not finish");
}

#[test]
fn test_game_over_has_no_make_move() {
    // A finished game only offers board, score, snapshot and restart;
    // `make_move` exists on `GameActive` alone.
    let board =
        Board::from_cells([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    match GameActive::from_parts(board, 0, GameRules::default()).unwrap() {
        GameResult::Over(over) => {
            let setup = over.restart();
            assert_eq!(setup.board().tile_count(), 0);
        }
        GameResult::Active(_) => panic!("Checkerboard must be terminal"),
    }
}

#[test]
fn test_malformed_input_rejected_at_construction() {
    let ragged: Vec<Vec<u32>> = vec![vec![2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]];
    let err = Board::from_rows(&ragged).map_err(GameError::from).unwrap_err();
    assert!(err.to_string().contains("Malformed board"));

    let board = Board::from_cells([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    assert_eq!(
        Session::from_parts(board, 2, GameRules::default()),
        Err(GameError::InvalidScore(2))
    );
}

#[test]
fn test_invalid_direction_text() {
    let mut rng = StdRng::seed_from_u64(40);
    let session = Session::new(&mut rng);
    let err = session.apply_input("north", &mut rng).unwrap_err();
    assert_eq!(err, GameError::InvalidDirection("north".to_string()));
    assert_eq!(
        session.apply_input("L", &mut rng).map(|s| s.is_terminal()),
        Ok(false)
    );
}
