use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snake_board::game::{food_position_with_rng, init_fields, GameConfig, GameStatus, Position};

#[derive(Parser)]
#[command(name = "snake_board")]
#[command(version, about = "Set up a Snake board and print it")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Difficulty level (0 = slowest)
    #[arg(long)]
    difficulty: Option<usize>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config.field_size = size;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    let difficulty = config.validate().context("Invalid game configuration")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let center = i32::try_from(config.field_size / 2)
        .context("Field size is too large for board coordinates")?;
    let snake = Position::new(center, center);
    let food = food_position_with_rng(&mut rng, config.field_size, &[snake])
        .context("Failed to place food")?;
    let field = init_fields(config.field_size, snake, food).context("Failed to build field")?;

    log::info!(
        "status={} difficulty={} tick={}ms",
        GameStatus::Init,
        difficulty.level(),
        difficulty.interval_ms()
    );
    print!("{}", field);

    Ok(())
}
