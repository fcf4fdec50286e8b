use std::io::Write;

use crossterm::{execute, terminal, ExecutableCommand};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;
use crate::slots::Feedback;

type PickerTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Owns the screen while a slot picker is open. Dropping it gives the
/// shell its screen and cursor back, error paths included.
pub struct TerminalGuard {
    terminal: PickerTerminal,
    released: bool,
}

impl TerminalGuard {
    /// Switch to a raw alternate screen for drawing the slot grid.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        Ok(Self {
            terminal,
            released: false,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut PickerTerminal {
        &mut self.terminal
    }

    /// Hand the screen back before the chosen path is printed. Later calls
    /// do nothing.
    pub fn restore(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.terminal.show_cursor()?;
        self.terminal
            .backend_mut()
            .execute(terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        self.released = true;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Rings the terminal bell when a save name is refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Feedback for TerminalBell {
    fn rejected(&mut self) {
        let mut out = std::io::stdout();
        if out.write_all(b"\x07").is_ok() {
            let _ = out.flush();
        }
    }
}
