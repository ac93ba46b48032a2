use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use easycal::api::ApiClient;
use easycal::commands::{ConfigCommand, DayCommand, GoalsCommand};
use easycal::config::Config;

#[derive(Parser)]
#[command(name = "easycal")]
#[command(version)]
#[command(about = "Track daily food consumption against nutrition goals", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// View and edit a day's consumptions
    Day(DayCommand),

    /// Manage nutrition goals
    Goals(GoalsCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Day(cmd)) => {
            let client = ApiClient::new(config.server_url.clone());
            cmd.run(client, &config).await?;
        }
        Some(Commands::Goals(cmd)) => {
            let client = ApiClient::new(config.server_url.clone());
            cmd.run(&client, &config).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
