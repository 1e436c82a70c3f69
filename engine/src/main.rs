// Examhub
// Main entry point for the examhub binary

use clap::Parser;
use examhub_engine::cli::{Cli, Command};
use examhub_engine::config::{validate_log_level, Config};
use examhub_engine::handlers::{
    handle_communicate, handle_config, handle_demo, handle_exam, handle_mediate, handle_notify,
    handle_stakeholders, handle_theme,
};
use examhub_engine::output::{ConsoleSink, OutputFormat};
use examhub_engine::settings::{ThemeRegistry, DEFAULT_THEME};
use examhub_engine::telemetry::init_telemetry_with_level;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (or use custom path if provided)
    let config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load_or_default()?
    };

    // --log wins over the configured level
    let log_level = match &cli.log {
        Some(level) => {
            validate_log_level(level)?;
            level.as_str()
        }
        None => config.core.log_level.as_str(),
    };
    init_telemetry_with_level(log_level);

    let version = env!("CARGO_PKG_VERSION");
    let commit = env!("GIT_COMMIT_HASH");
    let timestamp = env!("BUILD_TIMESTAMP");

    tracing::info!("Examhub v{} ({} - {})", version, commit, timestamp);

    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut sink = ConsoleSink::stdout(format);

    let registry = ThemeRegistry::global();
    if config.settings.theme != DEFAULT_THEME {
        registry.set_theme(config.settings.theme.as_str());
    }

    // Handle commands
    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => handle_demo(&config, registry, &mut sink),

        Command::Theme { set } => handle_theme(registry, set, &mut sink),

        Command::Mediate { sender, message } => handle_mediate(&sender, &message, &mut sink),

        Command::Exam { mode } => handle_exam(mode.unwrap_or(config.exam.mode), &mut sink),

        Command::Stakeholders { count } => handle_stakeholders(
            count.unwrap_or(config.walkthrough.stakeholders),
            &mut sink,
        ),

        Command::Communicate { message } => handle_communicate(&message, &mut sink),

        Command::Notify { message } => handle_notify(&message, &mut sink),

        Command::Config => handle_config(&config, &mut sink),
    }
}
