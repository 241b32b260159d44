use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use deck_vector::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Raw-mode alternate screen that is left again on drop, so a panic inside the
/// event loop does not leave the shell in raw mode.
struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Screen {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal, active: true })
    }

    fn leave(mut self) -> io::Result<()> {
        self.active = false;
        disable_raw_mode()?;
        crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            let _ = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        }
    }
}

fn print_notice() {
    println!("deck-vector {}: browse a 52-card deck in the terminal.", deck_vector::VERSION);
    println!("stdout is not a TTY, so the browser was not started.");
    println!();
    println!("Deck keys:  arrows move  s shuffle  r/u/b sort by rank/suit/spades-high");
    println!("            v reverse view  f filter suit  n reset  m settings  ? help  q quit");
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        print_notice();
        return Ok(());
    }

    let mut screen = Screen::enter()?;
    let mut app = AppState::default();
    let res = controller::run(&mut screen.terminal, &mut app, TICK_RATE);
    screen.leave()?;
    res
}
