//! Checksum and token generation.

pub mod checksum;
pub mod count;
pub mod derive;
pub mod service;

pub use checksum::compute_checksum;
pub use count::TokenCount;
pub use derive::{derive_token, generate_tokens};
pub use service::{TokenBatch, TokenGenerator, generate};
