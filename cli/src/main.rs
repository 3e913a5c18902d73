//! # termtiles
//!
//! Play 2048 in the terminal.

mod input;
mod render;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use termtiles_core::Game;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::input::Command;

#[derive(Parser, Debug)]
#[command(name = "termtiles")]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Args {
    /// Random seed for tile placement (drawn at random and logged if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tracing filter, e.g. "info" or "termtiles_core=debug"
    #[arg(long, default_value = "warn")]
    log: String,

    /// Write logs to this file. Without it logs are discarded, since the
    /// terminal is taken over by the game screen
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "starting");
    let mut game = Game::new(seed);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)
        .context("failed to enter alternate screen")?;

    let res = run(&mut stdout, &mut game);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);

    res?;
    println!("Final score: {} (seed {})", game.score(), seed);
    Ok(())
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_new(&args.log)
        .with_context(|| format!("invalid log filter {:?}", args.log))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_writer(args.log_file.as_deref())?)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Log destination. Stdout and stderr both share the alternate screen, so
/// with no file given everything goes to a sink.
fn log_writer(path: Option<&Path>) -> Result<BoxMakeWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(io::sink)),
    }
}

/// Read keys and apply them to the game until the player quits.
fn run<W: Write>(out: &mut W, game: &mut Game) -> Result<()> {
    redraw(out, game)?;

    loop {
        let key = match event::read().context("failed to read terminal event")? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                redraw(out, game)?;
                continue;
            }
            _ => continue,
        };

        match input::map_key(key) {
            Some(Command::Move(direction)) => {
                let outcome = game.apply_move(direction);
                if !outcome.changed {
                    continue;
                }
            }
            Some(Command::Restart) => {
                tracing::info!(score = game.score(), "restart");
                game.restart();
            }
            Some(Command::Quit) => return Ok(()),
            None => continue,
        }

        redraw(out, game)?;
    }
}

fn redraw<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    render::draw(out, game.grid(), game.score(), game.state()).context("failed to draw board")
}
