use anyhow::Result;
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use greenhouse_care::{
    init_telemetry, shutdown_telemetry, GreenhouseConfig, LifecycleStateMachine, Plant,
    PlantCareStaff, SalesStaff, StaffCommand, TaskScheduler,
};

#[derive(Parser)]
#[command(name = "greenhouse-care")]
#[command(about = "Plant lifecycle care and staff task scheduling for the greenhouse")]
struct Cli {
    /// Read configuration from this TOML file instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Water a seedling repeatedly and report each stage change
    Lifecycle {
        /// Species of the plant
        #[arg(long, default_value = "Rose")]
        species: String,
        /// Starting health (0-100)
        #[arg(long, default_value_t = 0)]
        health: i32,
        /// Number of waterings, each followed by a health check
        #[arg(long, default_value_t = 6)]
        waterings: u32,
    },
    /// Queue a day of staff tasks and run them
    Schedule {
        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GreenhouseConfig::load_from(path)?,
        None => {
            GreenhouseConfig::load_env_file()?;
            GreenhouseConfig::load()?
        }
    };
    init_telemetry(&config.observability)?;

    let result = match cli.command {
        Commands::Lifecycle {
            species,
            health,
            waterings,
        } => run_lifecycle(&config, species, health, waterings),
        Commands::Schedule { json } => run_schedule(&config, json),
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    };

    shutdown_telemetry();
    result
}

fn run_lifecycle(config: &GreenhouseConfig, species: String, health: i32, waterings: u32) -> Result<()> {
    let plant = Rc::new(RefCell::new(Plant::with_health(1, species, health)));
    let mut machine = LifecycleStateMachine::with_thresholds(&plant, config.lifecycle.thresholds());

    println!("{} #{} starts as {}", plant.borrow().species, plant.borrow().id, machine.stage());
    for round in 1..=waterings {
        let health = machine.water()?;
        let report = machine.check_health()?;
        if report.transitioned() {
            println!(
                "watering {round}: health {health}, {} -> {}",
                report.stage_before, report.stage_after
            );
        } else {
            println!("watering {round}: health {health}, still {}", report.stage_after);
        }
    }
    Ok(())
}

fn run_schedule(config: &GreenhouseConfig, json: bool) -> Result<()> {
    let care = Rc::new(PlantCareStaff::new("Thandi"));
    let sales = Rc::new(SalesStaff::new("Pieter"));
    let mut scheduler = TaskScheduler::with_config(&config.scheduler);

    scheduler.add_command(StaffCommand::water(&care));
    scheduler.add_command(StaffCommand::fertilize(&care));
    scheduler.add_command(StaffCommand::prune(&care));
    scheduler.add_command(StaffCommand::assist_customer(&sales));

    scheduler.run_one(StaffCommand::assist_customer(&sales))?;
    let report = scheduler.run_all();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in scheduler.history() {
        println!("{}  {}", entry.executed_at.format("%H:%M:%S%.3f"), entry.command);
    }
    for skipped in &report.skipped {
        println!("skipped {} ({}): {}", skipped.action, skipped.id, skipped.reason);
    }
    Ok(())
}
