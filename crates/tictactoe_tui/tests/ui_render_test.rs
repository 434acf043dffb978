//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend, style::Color};
use tictactoe_tui::{App, Theme, draw};

fn render(app: &App, theme: &Theme) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("test terminal");
    terminal
        .draw(|f| draw(f, app, theme))
        .expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press_all(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_fresh_game_shows_hints_and_turn() {
    let app = App::new();
    let screen = render(&app, &Theme::default());

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Turn: X"));
    for hint in 1..=9 {
        assert!(screen.contains(&format!(" {} ", hint)), "hint {} missing", hint);
    }
    assert!(!screen.contains("Wins!"));
}

#[test]
fn test_hints_can_be_hidden() {
    let app = App::new();
    let theme = Theme {
        show_hints: false,
        ..Theme::default()
    };
    let screen = render(&app, &theme);

    assert!(!screen.contains(" 5 "));
}

#[test]
fn test_marks_and_turn_after_moves() {
    let mut app = App::new();
    press_all(&mut app, "15");
    let screen = render(&app, &Theme::default());

    assert!(screen.contains(" X "));
    assert!(screen.contains(" O "));
    assert!(screen.contains("Turn: X"));
}

#[test]
fn test_win_message_rendered() {
    let mut app = App::new();
    press_all(&mut app, "14253");
    let screen = render(&app, &Theme::default());

    assert!(screen.contains("X Wins!"));
    assert!(screen.contains("Game over"));
}

#[test]
fn test_winning_line_highlighted() {
    let mut app = App::new();
    press_all(&mut app, "14253");

    let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("test terminal");
    terminal
        .draw(|f| draw(f, &app, &Theme::default()))
        .expect("draw");

    let highlighted = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .filter(|cell| cell.symbol() == "X" && cell.bg == Color::Green)
        .count();
    assert_eq!(highlighted, 3);
}

#[test]
fn test_draw_message_rendered() {
    let mut app = App::new();
    // X O X / X O O / O X X
    press_all(&mut app, "153287469");
    let screen = render(&app, &Theme::default());

    assert!(screen.contains("Draw!"));
}

#[test]
fn test_restart_clears_screen_message() {
    let mut app = App::new();
    press_all(&mut app, "14253r");
    let screen = render(&app, &Theme::default());

    assert!(!screen.contains("Wins!"));
    assert!(screen.contains("Turn: X"));
}
