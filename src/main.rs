use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pixel_snake::clock::SystemClock;
use pixel_snake::config::SimConfig;
use pixel_snake::driver::{LoopControl, LoopDriver};
use pixel_snake::error::AppError;
use pixel_snake::game::Simulation;
use pixel_snake::input::InputHandler;
use pixel_snake::logging;
use pixel_snake::renderer::RenderOptions;
use pixel_snake::terminal_runtime::{TerminalSession, restore_terminal};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Write diagnostics to this file instead of the default temp-dir log.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Draw the board without background grid dots.
    #[arg(long = "no-grid")]
    no_grid: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path) {
        eprintln!("Logging disabled: {error}");
    }

    install_panic_hook();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "game aborted");
            eprintln!("pixel-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut driver = LoopDriver::new(SystemClock::new());
    let mut sim = Simulation::new(SimConfig::DEFAULT);
    let options = RenderOptions {
        show_grid: !cli.no_grid,
    };

    info!("game started");

    loop {
        let frame_input = input.poll_frame().map_err(AppError::Input)?;
        if driver.frame(&mut sim, frame_input) == LoopControl::Break {
            break;
        }

        session.draw(&sim, options)?;
    }

    info!(
        frames = driver.frames(),
        high_score = sim.high_score(),
        deaths = sim.deaths(),
        "game finished"
    );

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
