use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::game::Simulation;
use crate::renderer::{self, RenderOptions};

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns raw mode and the alternate screen for one run of the game.
///
/// Dropping the session restores the terminal best-effort, including on the
/// error paths of [`TerminalSession::enter`].
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn enter() -> Result<Self, AppError> {
        enable_raw_mode().map_err(AppError::TerminalSetup)?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(AppError::TerminalSetup(error));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                debug!("terminal session entered");
                Ok(Self { terminal })
            }
            Err(error) => {
                restore_terminal();
                Err(AppError::TerminalSetup(error))
            }
        }
    }

    /// Draws the current simulation state.
    pub fn draw(&mut self, sim: &Simulation, options: RenderOptions) -> Result<(), AppError> {
        self.terminal
            .draw(|frame| renderer::render(frame, sim, options))
            .map(|_| ())
            .map_err(AppError::Draw)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        debug!("terminal session restored");
    }
}

/// Leaves raw mode and the alternate screen, ignoring failures.
///
/// Safe to call more than once; the panic hook relies on this.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if let Err(error) = execute!(stdout, Show, LeaveAlternateScreen) {
        warn!(%error, "failed to leave alternate screen");
    }
}
