//! Scoped ownership of the terminal.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

/// Terminal acquired for the lifetime of a game.
///
/// Acquiring puts the terminal in raw mode on the alternate screen, which is what routes key
/// presses to the game. Dropping the guard restores the terminal, whether the game returned
/// normally, with an error, or by unwinding.
pub struct TerminalGuard {
    /// The terminal being drawn on.
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    /// Takes over the terminal.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn acquire() -> Result<Self> {
        Ok(Self {
            terminal: ratatui::try_init()?,
        })
    }

    /// The terminal to draw on.
    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
