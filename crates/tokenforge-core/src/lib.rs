//! # tokenforge-core
//!
//! Core crate for TokenForge. Contains the configuration schemas and the
//! unified error system shared by the service, API and CLI crates.
//!
//! This crate has **no** internal dependencies on other TokenForge crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
