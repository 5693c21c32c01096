//! CLI command definitions and dispatch.

pub mod config;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use tokenforge_core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use tokenforge_core::error::AppError;

/// TokenForge — checksums and salted tokens from text
#[derive(Debug, Parser)]
#[command(name = "tokenforge", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the MD5 checksum of some text
    Checksum(token::ChecksumArgs),
    /// Generate salted tokens and the checksum for some text
    Generate(token::GenerateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Checksum(args) => token::checksum(args, self.format),
            Commands::Generate(args) => token::generate(args, &self.config, self.format),
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
