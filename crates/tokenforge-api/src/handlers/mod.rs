//! Route handlers.

pub mod form;
pub mod health;
pub mod root;
pub mod token;
