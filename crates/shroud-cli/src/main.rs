mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use shroud_config::Config;
use shroud_security::Redactor;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize tracing (stderr, so stdout carries only redacted text)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let redactor = Redactor::new();

    if cli.list_rules {
        return commands::rules::handle(&redactor);
    }

    commands::redact::handle(&cli, &config, &redactor)
}
