//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use tokenforge_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (file + environment + defaults)
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                println!("  Server: {}", config.bind_address());
                println!("  Max tokens per request: {}", config.tokens.max_count);
                println!(
                    "  Logging: {} ({})",
                    config.logging.level, config.logging.format
                );
            }
            Err(e) => {
                return Err(AppError::configuration(format!(
                    "Configuration '{}' is invalid: {}",
                    config_path, e.message
                )));
            }
        },
    }

    Ok(())
}
