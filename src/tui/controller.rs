use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Map a key press onto the app; returns `true` when the user asked to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => InputAction::MenuPrev,
            KeyCode::Down => InputAction::MenuNext,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => InputAction::MenuInc,
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => InputAction::MenuDec,
            KeyCode::Enter => InputAction::MenuApply,
            KeyCode::Esc => InputAction::MenuCancel,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => return false,
        },
        Scene::Deck => match code {
            KeyCode::Left => InputAction::CursorLeft,
            KeyCode::Right => InputAction::CursorRight,
            KeyCode::Up => InputAction::CursorUp,
            KeyCode::Down => InputAction::CursorDown,
            KeyCode::Char('s') | KeyCode::Char('S') => InputAction::Shuffle,
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::SortByRank,
            KeyCode::Char('u') | KeyCode::Char('U') => InputAction::SortBySuit,
            KeyCode::Char('b') | KeyCode::Char('B') => InputAction::SortSpadesHigh,
            KeyCode::Char('v') | KeyCode::Char('V') => InputAction::ToggleReversed,
            KeyCode::Char('f') | KeyCode::Char('F') => InputAction::CycleSuitFilter,
            KeyCode::Char('n') | KeyCode::Char('N') => InputAction::Reset,
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => return false,
        },
    };
    let _ = app.handle_input(action);
    false
}
