//! Headless replay: apply a move list and print the result.

use anyhow::{Context, Result, bail};
use std::io::Write;
use tictactoe_core::{GameState, Outcome, Phase, Position};
use tracing::{info, instrument};

/// Applies `moves` (cell indices 0-8) to a fresh game and writes the board
/// followed by the status line to `out`.
///
/// # Errors
///
/// Fails on an index outside 0-8, on a rejected move, or on a write error.
#[instrument(skip(out))]
pub fn run_replay(moves: &[usize], out: &mut impl Write) -> Result<GameState> {
    let mut game = GameState::new();
    let mut outcome = Outcome::Continue;

    for (turn, index) in moves.iter().enumerate() {
        let Some(pos) = Position::from_index(*index) else {
            bail!("Move {}: cell index {} is out of range (0-8)", turn + 1, index);
        };
        outcome = game
            .apply_move(pos)
            .with_context(|| format!("Move {}: cannot play cell {}", turn + 1, index))?;
    }

    info!(moves = moves.len(), ?outcome, "Replay finished");

    writeln!(out, "{}", game.board())?;
    writeln!(out)?;
    match game.phase() {
        Phase::Active(player) => writeln!(out, "Turn: {}", player)?,
        Phase::Won(_) | Phase::Drawn => writeln!(out, "{}", game.status_message())?,
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay_to_string(moves: &[usize]) -> Result<String> {
        let mut out = Vec::new();
        run_replay(moves, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_win_output() {
        let text = replay_to_string(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(text, "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nX Wins!\n");
    }

    #[test]
    fn test_draw_output() {
        let text = replay_to_string(&[0, 4, 2, 1, 7, 6, 3, 5, 8]).unwrap();
        assert!(text.ends_with("\nDraw!\n"));
    }

    #[test]
    fn test_unfinished_game_shows_turn() {
        let text = replay_to_string(&[4]).unwrap();
        assert!(text.ends_with("\nTurn: O\n"));
    }

    #[test]
    fn test_out_of_range_index() {
        let err = replay_to_string(&[0, 9]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_repeated_cell_rejected() {
        let err = replay_to_string(&[4, 4]).unwrap_err();
        assert!(err.to_string().contains("Move 2"));
        assert!(format!("{:#}", err).contains("already occupied"));
    }
}
