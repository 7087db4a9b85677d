mod analyze;
mod pipeline;
mod settings;
mod view;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::AnalyzeArgs;
use crate::settings::SettingsCommands;

#[derive(Debug, Parser)]
#[command(name = "cintel")]
#[command(about = "Creator roster intelligence: KPI tiers, regional and demographic estimates")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a creator roster from text and/or files
    Analyze(AnalyzeArgs),
    /// Manage the stored graph access token
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Explain how the report's figures are estimated
    Methodology,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = cintel_core::load_app_config()?;
    // Logs go to stderr so the report on stdout can be piped.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze(args)) => analyze::run_analyze(&config, &args).await,
        Some(Commands::Settings { command }) => settings::run_settings(&config, &command),
        Some(Commands::Methodology) => {
            print!("{}", view::METHODOLOGY);
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
