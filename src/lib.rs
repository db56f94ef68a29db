//! Pixel-grid Snake: a continuous-movement snake simulation plus a terminal
//! front end that drives it at a fixed frame cadence.

pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;

pub mod ui {
    pub mod hud;
}
