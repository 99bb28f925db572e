use anyhow::Context;
use clap::Parser;
use std::path::Path;

mod cli;
mod clipboard;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

#[cfg(test)]
mod test_utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, config_warnings) = Config::load();

    match logging::init(&config) {
        Ok(()) => logging::report_config_warnings(&config_warnings),
        Err(e) => {
            eprintln!("⚠️ Logging disabled: {}", e);
            for warning in &config_warnings {
                eprintln!("⚠️ {}", warning);
            }
        }
    }

    log::info!("🔐 Starting rust_passgen");
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    ctrlc::set_handler(|| {
        log::info!("🔴 Ctrl+C received. Shutting down...");
        println!("\n👋 Goodbye!");
        std::process::exit(0);
    })
    .context("Failed to set Ctrl+C handler")?;

    let result = match args.command {
        Some(CliCommand::Generate { config: ref config_args, count, copy }) => {
            cli::handlers::handle_generate(config_args, count, copy, args.json, args.seed, &config).await
        }
        Some(CliCommand::Strength { config: ref config_args }) => {
            cli::handlers::handle_strength(config_args, args.json, &config)
        }
        Some(CliCommand::Interactive) | None => {
            if args.json {
                log::warn!("--json has no effect in interactive mode");
            }
            cli::menu::run_cli_menu(&config, args.seed)
        }
    };

    if let Err(e) = result {
        log::error!("Command failed: {}", e);
        anyhow::bail!("{}", e);
    }

    log::info!("✅ rust_passgen shutdown complete.");
    Ok(())
}
