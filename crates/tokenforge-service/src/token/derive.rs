//! Salted SHA-256 token derivation.

use sha2::{Digest, Sha256};

/// Length of a rendered token in hex characters.
pub const TOKEN_HEX_LEN: usize = 64;

/// Random bytes drawn per token; rendered as twice as many hex characters.
pub const SALT_BYTES: usize = 8;

/// Draws a fresh salt from the thread-local CSPRNG as lowercase hex.
pub fn new_salt() -> String {
    let bytes: [u8; SALT_BYTES] = rand::random();
    hex::encode(bytes)
}

/// Hashes `{text}-{index}-{salt}` with SHA-256 and returns the lowercase hex
/// digest.
pub fn derive_token(text: &str, index: usize, salt: &str) -> String {
    let composite = format!("{text}-{index}-{salt}");
    hex::encode(Sha256::digest(composite.as_bytes()))
}

/// Produces `count` tokens for `text`, each with its own fresh salt, in
/// ascending index order.
pub fn generate_tokens(text: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|index| derive_token(text, index, &new_salt()))
        .collect()
}
