//! Tests for the tic-tac-toe game state machine.

use tictactoe_core::{
    GameState, MoveError, Outcome, Phase, Player, Position, Square, WINNING_COMBINATIONS,
};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|i| Position::from_index(*i).expect("index in range"))
        .collect()
}

/// Plays `indices` one at a time, returning every outcome.
fn play_all(game: &mut GameState, indices: &[usize]) -> Vec<Outcome> {
    positions(indices)
        .into_iter()
        .map(|pos| game.apply_move(pos).expect("legal move"))
        .collect()
}

#[test]
fn test_reset_clears_board_and_hands_turn_to_x() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8]);

    game.reset();

    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.current_player(), Player::X);
    assert!(game.is_active());
    assert!(game.history().is_empty());
    assert_eq!(game.status_message(), "");
}

#[test]
fn test_move_marks_exactly_one_cell() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4]);

    let before = game.board().clone();
    game.apply_move(Position::BottomRight).unwrap();
    let after = game.board();

    for pos in Position::ALL {
        if pos == Position::BottomRight {
            assert_eq!(before.get(pos), Square::Empty);
            assert_eq!(after.get(pos), Square::Occupied(Player::X));
        } else {
            assert_eq!(before.get(pos), after.get(pos), "{} changed", pos);
        }
    }
}

#[test]
fn test_each_winning_triple_ends_the_game() {
    for line in WINNING_COMBINATIONS {
        // O only gets two marks before X's third, so any cells off the line do.
        let spare: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| !line.contains(pos))
            .collect();

        let mut game = GameState::new();
        assert_eq!(game.apply_move(line[0]).unwrap(), Outcome::Continue);
        assert_eq!(game.apply_move(spare[0]).unwrap(), Outcome::Continue);
        assert_eq!(game.apply_move(line[1]).unwrap(), Outcome::Continue);
        assert_eq!(game.apply_move(spare[1]).unwrap(), Outcome::Continue);
        assert_eq!(
            game.apply_move(line[2]).unwrap(),
            Outcome::Win(Player::X),
            "{:?} should win",
            line
        );
        assert_eq!(game.winning_line(), Some(line));
        assert_eq!(game.phase(), Phase::Won(Player::X));
    }
}

#[test]
fn test_turns_alternate_until_game_ends() {
    let mut game = GameState::new();
    let sequence = positions(&[0, 4, 8, 2, 6, 3, 5, 7]);
    let mut expected = Player::X;

    for pos in sequence {
        assert_eq!(game.current_player(), expected);
        assert_eq!(game.apply_move(pos).unwrap(), Outcome::Continue);
        assert_eq!(game.board().get(pos), Square::Occupied(expected));
        expected = expected.opponent();
    }
}

#[test]
fn test_top_row_scenario_wins_for_x() {
    let mut game = GameState::new();
    let outcomes = play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcomes,
        vec![
            Outcome::Continue,
            Outcome::Continue,
            Outcome::Continue,
            Outcome::Continue,
            Outcome::Win(Player::X),
        ]
    );
    assert!(!game.is_active());
    assert_eq!(game.status_message(), "X Wins!");
}

#[test]
fn test_o_can_win() {
    let mut game = GameState::new();
    let outcomes = play_all(&mut game, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(outcomes.last(), Some(&Outcome::Win(Player::O)));
    assert_eq!(game.status_message(), "O Wins!");
}

#[test]
fn test_full_board_without_triple_is_draw() {
    // Final board: X O X / X O O / O X X
    let mut game = GameState::new();
    let outcomes = play_all(&mut game, &[0, 4, 2, 1, 7, 6, 3, 5, 8]);

    assert!(outcomes[..8].iter().all(|o| *o == Outcome::Continue));
    assert_eq!(outcomes[8], Outcome::Draw);
    assert_eq!(game.phase(), Phase::Drawn);
    assert_eq!(game.status_message(), "Draw!");
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_finished_game_rejects_moves_until_reset() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let frozen = game.clone();

    for pos in [Position::BottomRight, Position::TopLeft] {
        assert_eq!(game.apply_move(pos), Err(MoveError::GameOver));
    }
    assert_eq!(game, frozen);

    game.reset();
    assert_eq!(game.phase(), Phase::Active(Player::X));
    assert_eq!(game.apply_move(Position::Center), Ok(Outcome::Continue));
}

#[test]
fn test_reset_after_draw_returns_to_active_x() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4, 2, 1, 7, 6, 3, 5, 8]);

    game.reset();

    assert_eq!(game.phase(), Phase::Active(Player::X));
    assert_eq!(game, GameState::new());
}

#[test]
fn test_replay_stops_at_first_rejected_move() {
    let result = GameState::replay(&positions(&[4, 4, 0]));
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Square Center is already occupied"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
}

#[test]
fn test_state_serializes_to_json() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0]);

    let json = serde_json::to_value(&game).expect("serialize");
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["active"], true);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));

    let restored: GameState = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored, game);
}

#[test]
fn test_snapshot_with_missing_history_is_rejected() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0]);

    let mut json = serde_json::to_value(&game).expect("serialize");
    json["history"] = serde_json::json!([]);

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("Board matches the replayed move history"));
}

#[test]
fn test_snapshot_with_wrong_player_to_move_is_rejected() {
    let mut game = GameState::new();
    play_all(&mut game, &[4]);

    let mut json = serde_json::to_value(&game).expect("serialize");
    json["current_player"] = serde_json::json!("X");

    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_accepted_snapshot_plays_on_like_the_live_game() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 4]);

    let json = serde_json::to_string(&game).expect("serialize");
    let mut restored: GameState = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.apply_move(Position::TopCenter), Ok(Outcome::Continue));
    assert_eq!(game.apply_move(Position::TopCenter), Ok(Outcome::Continue));
    assert_eq!(restored, game);
}
