//! The interactive form page.

use std::fmt;

use minijinja::Environment;
use serde::Serialize;

use tokenforge_core::config::AppInfoConfig;
use tokenforge_core::error::AppError;
use tokenforge_core::result::AppResult;
use tokenforge_service::TokenBatch;

const FORM_TEMPLATE: &str = "form.html";

/// Values rendered into `form.html`.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub title: String,
    pub description: String,
    pub participant: String,
    /// Present only after a submission.
    pub result: Option<FormResult>,
}

/// Output of a form submission.
#[derive(Debug, Clone, Serialize)]
pub struct FormResult {
    pub text: String,
    pub checksum: String,
    pub tokens: Vec<String>,
}

impl FormView {
    /// The empty form.
    pub fn new(info: &AppInfoConfig) -> Self {
        Self {
            title: info.title.clone(),
            description: info.description.clone(),
            participant: info.participant.clone(),
            result: None,
        }
    }

    /// The form re-rendered with a generated batch.
    pub fn with_result(mut self, text: String, batch: TokenBatch) -> Self {
        self.result = Some(FormResult {
            text,
            checksum: batch.checksum,
            tokens: batch.tokens,
        });
        self
    }
}

/// Holds the template environment; built once at startup.
///
/// The template name ends in `.html`, so minijinja escapes every
/// interpolated value.
pub struct FormRenderer {
    env: Environment<'static>,
}

impl FormRenderer {
    /// Compiles the embedded form template.
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        env.add_template(FORM_TEMPLATE, include_str!("../../templates/form.html"))
            .map_err(|e| AppError::template(format!("Failed to compile {FORM_TEMPLATE}: {e}")))?;
        Ok(Self { env })
    }

    /// Renders the page.
    pub fn render(&self, view: &FormView) -> AppResult<String> {
        self.env
            .get_template(FORM_TEMPLATE)
            .and_then(|template| template.render(view))
            .map_err(|e| AppError::template(format!("Failed to render {FORM_TEMPLATE}: {e}")))
    }
}

impl fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRenderer")
            .field("template", &FORM_TEMPLATE)
            .finish()
    }
}
