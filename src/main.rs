mod clock;
mod config;
mod error;
mod frontend;
mod game;
mod grid;
mod item;
mod snake;
mod term;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, WriteLogger};

use crate::clock::Clock;
use crate::config::GameConfig;
use crate::game::SnakeGame;
use crate::grid::MAX_GRID_SIDE;
use crate::term::{KeyboardInput, TermSurface};

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wraparound grid in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "32", value_parser = clap::value_parser!(u16).range(1..=MAX_GRID_SIDE as i64))]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u16).range(1..=MAX_GRID_SIDE as i64))]
    height: u16,

    /// Game updates per second
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..=1000))]
    tick_rate: u32,

    /// Seed for the random source
    #[arg(long)]
    seed: Option<u64>,

    /// Where log lines go, the terminal being taken by the game
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_parser = parse_level)]
    log_level: LevelFilter,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            grid_width: cli.width,
            grid_height: cli.height,
            tick_rate: cli.tick_rate,
            seed: cli.seed,
            log_file: cli.log_file,
            log_level: cli.log_level,
        }
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{}'", s))
}

fn main() -> Result<()> {
    let config = GameConfig::from(Cli::parse());

    let log_file = File::create(&config.log_file)
        .with_context(|| format!("cannot create log file {}", config.log_file.display()))?;
    WriteLogger::init(config.log_level, Config::default(), log_file).context("cannot set up logging")?;

    let grid = config.grid()?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "Starting on a {}x{} grid at {} ticks/s, seed {:?}",
        grid.width(), grid.height(), config.tick_rate, config.seed
    );

    let surface = TermSurface::open(&grid).context("cannot set up the terminal")?;
    let mut game = SnakeGame::new(grid, surface, KeyboardInput, rng)?;
    let mut clock = Clock::new(config.tick_rate);
    info!("Tick period {:?}", clock.period());

    // Dropping the game hands the terminal back
    game.run(&mut clock)
}
