use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use motorcade_model::{Describe, FleetConfig, LuxuryCar, Showpiece, SportsCar};

/// Showcase fleet shipped with the demo.
const DEFAULT_FLEET: &str = include_str!("../assets/fleet.json");

#[derive(Debug, Parser)]
#[command(name = "motorcade-demo", version)]
#[command(about = "Console showcase for the Motorcade vehicle hierarchy")]
struct Args {
    /// Load the showcase fleet from a JSON file instead of the built-in one
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Print the machine-oriented representation alongside each description
    #[arg(long)]
    debug_repr: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let fleet = load_fleet(args.fleet.as_deref())?;
    let showpieces = fleet.build_all();
    log::info!("showcasing {} vehicles", showpieces.len());

    println!("{}", "=== Showroom ===".bold());
    for showpiece in &showpieces {
        println!("{}", showpiece.describe());
        if args.debug_repr {
            println!("{}", showpiece.debug_repr().dimmed());
        }
    }

    run_acceleration_demo(&showpieces);
    run_feature_demo();

    Ok(())
}

fn load_fleet(path: Option<&std::path::Path>) -> Result<FleetConfig> {
    let json = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read fleet file {}", path.display()))?,
        None => DEFAULT_FLEET.to_string(),
    };
    FleetConfig::from_json(&json).context("failed to parse fleet data")
}

/// Accelerate the first sports car of the fleet, plain and then with
/// nitrous, printing the description before and after.
fn run_acceleration_demo(showpieces: &[Showpiece]) {
    let Some(car) = showpieces.iter().find_map(|showpiece| match showpiece {
        Showpiece::Sports(car) => Some(car),
        _ => None,
    }) else {
        log::info!("no sports car in the fleet, skipping the acceleration demo");
        return;
    };

    println!();
    println!("{}", "=== Acceleration ===".bold());
    let mut car: SportsCar = car.clone();
    println!("{}", car.describe());

    car.accelerate(10.0, false);
    log::debug!("plain acceleration applied, top speed now {}", car.top_speed);
    println!("{}", car.describe());

    car.accelerate(5.0, true);
    log::debug!(
        "nitrous acceleration applied, top speed now {}",
        car.top_speed
    );
    println!("{}", car.describe());
}

fn run_feature_demo() {
    println!();
    println!("{}", "=== Luxury features ===".bold());
    for feature in ["GPS", "автопилот"] {
        println!("{}", LuxuryCar::activate_luxury_feature(feature));
    }
}
