//! Terminal setup and teardown utilities.
//!
//! This module provides functions for initializing and restoring the
//! terminal state, as well as installing a panic hook that ensures the
//! terminal is properly restored on panic.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Sets up the terminal for TUI rendering.
///
/// Enables raw mode, enters the alternate screen buffer, and creates a
/// Ratatui terminal instance. The UI is keyboard-driven, so mouse capture
/// is not enabled.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(TerminalError::Setup)
}

/// Restores the terminal to its original state.
///
/// Disables raw mode, leaves the alternate screen buffer, and shows the
/// cursor.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before panicking.
///
/// Call this once at application startup, before setting up the terminal.
/// The original hook (captured at installation time) still executes after
/// terminal cleanup, so the panic message remains visible.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
