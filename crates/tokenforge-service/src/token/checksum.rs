//! MD5 checksum of input text.

use md5::{Digest, Md5};

/// Length of a rendered checksum in hex characters.
pub const CHECKSUM_HEX_LEN: usize = 32;

/// Returns the lowercase hex MD5 digest of the UTF-8 bytes of `text`.
pub fn compute_checksum(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}
