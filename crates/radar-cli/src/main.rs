//! Radar CLI - Terminal dashboard for political campaign intelligence.

use clap::Parser;
use radar_cli::commands;
use radar_cli::repl;
use radar_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RADAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> radar_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;
    if !color_enabled {
        colored::control::set_override(false);
    }

    let formatter = Formatter::new(format, color_enabled);

    let fixtures = cli.fixtures.or_else(|| config.data.fixtures.clone());
    let open_store = || commands::open_store(fixtures.as_deref());
    let page_size = config.settings.page_size;

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut open_store()?, &config, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &mut config, &config_path, &formatter)?;
        }
        Some(Command::Roster(args)) => {
            commands::execute_roster(args, &open_store()?, page_size, &formatter)?;
        }
        Some(Command::Pipeline(args)) => {
            commands::execute_pipeline(args, &open_store()?, &formatter)?;
        }
        Some(Command::Move(args)) => {
            commands::execute_move(args, &mut open_store()?, &formatter)?;
        }
        Some(Command::Narratives(args)) => {
            commands::execute_narratives(args, &open_store()?, &formatter)?;
        }
        Some(Command::Activity(args)) => {
            commands::execute_activity(args, &open_store()?, &formatter)?;
        }
        Some(Command::Sentiment(args)) => {
            commands::execute_sentiment(args, &open_store()?, &formatter)?;
        }
        Some(Command::Campaigns(args)) => {
            commands::execute_campaigns(args, &open_store()?, &formatter)?;
        }
    }

    Ok(())
}
