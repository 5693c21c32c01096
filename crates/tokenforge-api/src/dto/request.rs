//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `/checksum`, `/tokens`, `/generate` and the `/form` submission.
///
/// `text` is optional at the serde level so that a missing or `null` field
/// is reported by the `required` rule rather than a deserializer message.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TextRequest {
    /// Input text; any string, including empty, is accepted.
    #[validate(required(message = "text is required"))]
    pub text: Option<String>,
}

impl TextRequest {
    /// The validated text.
    pub fn into_text(self) -> String {
        self.text.unwrap_or_default()
    }
}
