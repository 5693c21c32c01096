//! Server-rendered HTML views.

pub mod form;

pub use form::{FormRenderer, FormResult, FormView};
