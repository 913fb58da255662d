//! FAUNA - CLI entry point
//!
//! Abstract-factory animal world demonstration: thin wiring only, the
//! reusable core lives in the library.

use clap::{Parser, Subcommand};
use fauna::{run_scenario, Config, Continent};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fauna")]
#[command(version)]
#[command(about = "Continent factories and the food chains they produce")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the food chain demonstration
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "fauna.yaml")]
        config: PathBuf,

        /// Run a single continent instead of the configured scenarios
        #[arg(long)]
        continent: Option<String>,
    },

    /// List continents and the animal families they produce
    List,

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "fauna.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, continent } => run_demonstration(config, continent),

        Commands::List => list_continents(),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_demonstration(
    config_path: PathBuf,
    continent: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Scenario selection: CLI override, config file, or defaults.
    // Report lines are the only stdout output; chatter goes to the log.
    let scenarios = if let Some(name) = continent {
        vec![name.parse::<Continent>()?]
    } else if config_path.exists() {
        log::info!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?.scenarios
    } else {
        log::info!("Using default configuration");
        Config::default().scenarios
    };

    for continent in scenarios {
        log::debug!("Running {} scenario", continent.name());
        println!("{}", run_scenario(continent));
    }

    Ok(())
}

fn list_continents() -> Result<(), Box<dyn std::error::Error>> {
    for continent in Continent::all() {
        let factory = continent.factory();
        println!(
            "{}: {} (herbivore), {} (carnivore)",
            continent.name(),
            factory.create_herbivore().species(),
            factory.create_carnivore().species()
        );
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
