//! Key mapping: cursor movement and direct cell selection.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor to a neighbouring cell.
    Cursor(Position),
    /// Place a mark at the given cell.
    Select(Position),
    /// Place a mark under the cursor.
    SelectCursor,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    Ignored,
}

/// Maps a key press to an [`Input`], given the current cursor.
pub fn map_key(cursor: Position, key: KeyCode) -> Input {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char('r') => Input::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Input::SelectCursor,
        KeyCode::Char(c) => digit_position(c).map_or(Input::Ignored, Input::Select),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Input::Cursor(move_cursor(cursor, key))
        }
        _ => Input::Ignored,
    }
}

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Digits 1-9 name cells in row-major order, matching the on-screen hints.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('5'), Some(Position::Center));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
        assert_eq!(digit_position('x'), None);
    }

    #[test]
    fn test_key_bindings() {
        let cursor = Position::Center;
        assert_eq!(map_key(cursor, KeyCode::Char('q')), Input::Quit);
        assert_eq!(map_key(cursor, KeyCode::Esc), Input::Quit);
        assert_eq!(map_key(cursor, KeyCode::Char('r')), Input::Restart);
        assert_eq!(map_key(cursor, KeyCode::Enter), Input::SelectCursor);
        assert_eq!(map_key(cursor, KeyCode::Char(' ')), Input::SelectCursor);
        assert_eq!(map_key(cursor, KeyCode::Char('3')), Input::Select(Position::TopRight));
        assert_eq!(map_key(cursor, KeyCode::Up), Input::Cursor(Position::TopCenter));
        assert_eq!(map_key(cursor, KeyCode::Tab), Input::Ignored);
        assert_eq!(map_key(cursor, KeyCode::Char('z')), Input::Ignored);
    }
}
