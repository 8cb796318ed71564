mod simulation;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use simulation::{NetworkConfig, SimWorld};

#[derive(Parser)]
#[command(name = "crossroad_sim")]
#[command(about = "Thread-per-vehicle traffic simulation on a cross-shaped road grid")]
struct Cli {
    /// Network file holding grid height, grid width and vehicle count
    #[arg(default_value = "reseau.txt")]
    network: PathBuf,

    /// Seed for reproducible vehicle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between movement steps in milliseconds
    #[arg(long, default_value = "500")]
    tick_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = NetworkConfig::load(&cli.network)?;

    let mut world = match cli.seed {
        Some(seed) => SimWorld::new_with_seed(config.height, config.width, seed),
        None => SimWorld::new(config.height, config.width),
    }
    .with_tick(Duration::from_millis(cli.tick_ms));

    world.populate(config.vehicle_count)?;

    println!("Initial map:");
    print!("{}", world.render()?);
    println!();

    let stats = world.run()?;

    println!("Final map:");
    print!("{}", world.render()?);

    stats.log_summary();

    Ok(())
}
