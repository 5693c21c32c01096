//! # tokenforge-service
//!
//! Business logic for TokenForge: MD5 checksums of input text and batches of
//! salted SHA-256 tokens derived from it.
//!
//! Everything here is pure computation apart from drawing salt bytes from the
//! thread-local CSPRNG, so the types are cheap to clone and safe to share
//! across request handlers.

pub mod token;

pub use token::{
    TokenBatch, TokenCount, TokenGenerator, compute_checksum, derive_token, generate,
    generate_tokens,
};
