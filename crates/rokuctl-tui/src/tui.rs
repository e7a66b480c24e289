//! Terminal session: raw mode, alternate screen, bracketed paste.
//!
//! Whatever path leaves the app (normal quit, `?`, panic) puts the
//! terminal back the way the shell had it.

use std::io::{Stdout, stdout};
use std::path::Path;

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Take over the terminal. Dropping the returned value gives it back.
    pub fn start() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal::enable_raw_mode()?;
        let mut tui = Self { terminal };
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::Hide
        )?;
        tui.terminal.clear()?;
        Ok(tui)
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best effort: each step runs even if an earlier one failed.
fn restore_terminal() {
    let _ = execute!(stdout(), DisableBracketedPaste);
    let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Panic and error reports restore the terminal first and point at the log.
///
/// Must run before [`Tui::start`] so a panic during setup still prints cleanly.
pub fn install_hooks(log_file: &Path) -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .panic_section(format!("Log file: {}", log_file.display()))
        .into_hooks();
    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        panic_hook(info);
    }));
    Ok(())
}
