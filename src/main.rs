mod board;
mod clock;
mod food;
mod game;
mod input;
mod render;
mod snake;
mod term;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::board::Board;
use crate::clock::FrameClock;
use crate::game::SnakeGame;
use crate::input::KeyboardInput;
use crate::term::TermManager;

pub type GridInt = u16;
pub type Cell = (GridInt, GridInt);

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(version, about = "Snake on a wrap-around grid, played in the terminal")]
struct Cli {
    /// File the game log is written to
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// Most verbose log level to record (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the game, so logs go to a file
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file).context("Failed to initialize logger")?;

    info!("Starting wrapsnake");

    let board = Board::default();
    let mut term = TermManager::new(board);
    let mut input = KeyboardInput::new();
    let mut clock = FrameClock::new();
    let mut game = SnakeGame::new(board);

    term.setup()?;
    let result = game.run(&mut term, &mut input, &mut clock);
    let restored = term.restore();

    end_session(result, restored)
}

// The game loop's own failure outranks a failure to restore the terminal
fn end_session(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), restored) => {
            error!("Game loop failed: {:#}", e);
            if let Err(restore_err) = restored {
                error!("Restoring the terminal also failed: {:#}", restore_err);
            }
            Err(e)
        }
        (Ok(()), restored) => restored,
    }
}
