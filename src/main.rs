use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wrap_snake::game::WorldConfig;
use wrap_snake::modes::{AutoMode, HumanMode};

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a board that wraps around its edges")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Board width (the board is square)
    #[arg(long, default_value = "16")]
    width: usize,

    /// Starting cell of the snake's head (defaults to the centre)
    #[arg(long)]
    spawn: Option<usize>,

    /// Snake length that wins the game (defaults to filling the board)
    #[arg(long)]
    win_length: Option<usize>,

    /// Seed for reward placement
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between game ticks in human mode
    #[arg(long, default_value = "125")]
    tick_ms: u64,

    /// Step limit for auto mode
    #[arg(long, default_value = "10000")]
    max_steps: u32,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with keyboard controls
    Human,
    /// Let the autopilot play a headless game
    Auto,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match (&cli.log_file, &cli.mode) {
        (Some(path), _) => init_file_tracing(path)?,
        // The terminal UI owns stderr, so human mode only logs to a file
        (None, Mode::Auto) => init_tracing(),
        (None, Mode::Human) => {}
    }

    let config = WorldConfig {
        width: cli.width,
        spawn_index: cli.spawn,
        win_length: cli.win_length,
        seed: cli.seed,
    };
    config.validate().context("Invalid game configuration")?;

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, Duration::from_millis(cli.tick_ms))?;
            human_mode.run().await?;
        }
        Mode::Auto => {
            let summary = AutoMode::new(config, cli.max_steps).run()?;
            println!(
                "{} after {} steps: score {}, length {}",
                summary.status, summary.steps, summary.score, summary.length
            );
        }
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_file_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
