//! swarm-run: headless driver for the swarm simulation.
//!
//! Usage:
//!   swarm-run --ticks 1800 --seed 7
//!   swarm-run --config spawner.json --game-over-tick 900 --snapshot

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swarm_core::commands::GameCommand;
use swarm_core::config::SpawnerConfig;
use swarm_core::constants::DEFAULT_SEED;
use swarm_core::state::GameStateSnapshot;
use swarm_sim::{SimConfig, SimulationEngine};

#[derive(Parser)]
#[command(name = "swarm-run", about = "Run the enemy swarm simulation headless")]
struct Args {
    /// JSON spawner config; missing fields use the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of fixed-timestep ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Tick at which the start signal is sent
    #[arg(long, default_value_t = 0)]
    start_tick: u64,

    /// Tick at which the game-over flag is raised
    #[arg(long)]
    game_over_tick: Option<u64>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let spawner = match &args.config {
        Some(path) => load_config(path)?,
        None => SpawnerConfig::default(),
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        spawner,
        ..Default::default()
    })?;

    let mut last = GameStateSnapshot::default();
    for tick in 0..args.ticks {
        if tick == args.start_tick {
            engine.queue_command(GameCommand::StartSpawning);
        }
        if args.game_over_tick == Some(tick) {
            engine.queue_command(GameCommand::SetGameOver { game_over: true });
        }
        last = engine.tick();
    }

    info!(
        ticks = args.ticks,
        elapsed_secs = last.time.elapsed_secs,
        waves = last.wave.waves_spawned,
        enemies = last.enemies.len(),
        total_spawned = last.wave.total_spawned,
        "run complete"
    );

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&last)?);
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<SpawnerConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    SpawnerConfig::from_json_str(&json).with_context(|| format!("loading {}", path.display()))
}
