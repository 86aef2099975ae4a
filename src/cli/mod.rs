//! CLI module for the Health Assistant
//!
//! - `serve`: the prediction pages and JSON API
//! - `launch`: start `serve` in the background and redirect traffic to it

pub mod launch;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Health Assistant - disease risk prediction pages
#[derive(Parser)]
#[command(name = "health-assistant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the prediction UI and API
    Serve(serve::ServeArgs),

    /// Start the UI process and redirect every request to it
    Launch(launch::LaunchArgs),
}

/// Load `.env`, configuration and logging shared by every command
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Failed to load configuration, using defaults");
    }

    config
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["health-assistant", "serve", "--port", "9000"]).unwrap();

        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, Some(9000)),
            Command::Launch(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_launch() {
        let cli = Cli::try_parse_from(["health-assistant", "launch"]).unwrap();

        match cli.command {
            Command::Launch(args) => assert_eq!(args.port, None),
            Command::Serve(_) => panic!("expected launch"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["health-assistant"]).is_err());
    }
}
