// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::{CliCommand, ConfigArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords and rate their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed the generator for reproducible output
    #[arg(long, env = "PASSGEN_SEED", global = true)]
    pub seed: Option<u64>,

    /// Command to execute (defaults to the interactive generator)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
