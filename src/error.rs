use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the simulation: terminal setup, drawing, input, logging.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to initialise terminal: {0}")]
    TerminalSetup(#[source] io::Error),

    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
