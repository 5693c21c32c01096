//! Custom Axum extractors.

pub mod validated;

pub use validated::{ValidatedForm, ValidatedJson};
