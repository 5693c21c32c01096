//! Checksum and token generation commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tokenforge_core::error::AppError;
use tokenforge_service::{TokenBatch, TokenCount, TokenGenerator, compute_checksum};

use crate::output::{self, OutputFormat};

/// Arguments for `checksum`
#[derive(Debug, Args)]
pub struct ChecksumArgs {
    /// Text to hash
    pub text: String,
}

/// Arguments for `generate`
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Text to derive tokens from
    pub text: String,

    /// Number of tokens (defaults to 5)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,
}

/// Checksum output row
#[derive(Debug, Serialize, Tabled)]
pub struct ChecksumRow {
    /// Input text
    pub text: String,
    /// MD5 checksum
    pub checksum: String,
}

/// Token output row
#[derive(Debug, Serialize, Tabled)]
pub struct TokenRow {
    /// Position in the batch
    pub index: usize,
    /// Token hex digest
    pub token: String,
}

/// Execute `checksum`
pub fn checksum(args: &ChecksumArgs, format: OutputFormat) -> Result<(), AppError> {
    let row = ChecksumRow {
        text: args.text.clone(),
        checksum: compute_checksum(&args.text),
    };

    match format {
        OutputFormat::Table => output::print_list(&[row], format),
        OutputFormat::Json => output::print_item(&row, format),
    }
    Ok(())
}

/// Execute `generate`
pub fn generate(args: &GenerateArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let generator = TokenGenerator::new(&config.tokens);

    let count = resolve_count(&generator, args.count)?;
    let batch = generator.generate(&args.text, count);

    match format {
        OutputFormat::Table => {
            println!("checksum: {}", batch.checksum);
            output::print_list(&token_rows(&batch), format);
        }
        OutputFormat::Json => output::print_item(&batch, format),
    }
    Ok(())
}

/// Validates the `--count` flag, falling back to the default batch size.
pub fn resolve_count(
    generator: &TokenGenerator,
    requested: Option<i64>,
) -> Result<TokenCount, AppError> {
    match requested {
        Some(n) => generator.count(n),
        None => Ok(TokenCount::default()),
    }
}

fn token_rows(batch: &TokenBatch) -> Vec<TokenRow> {
    batch
        .tokens
        .iter()
        .enumerate()
        .map(|(index, token)| TokenRow {
            index,
            token: token.clone(),
        })
        .collect()
}
