//! Interactive HTML form handlers.

use axum::extract::State;
use axum::response::Html;

use crate::dto::request::TextRequest;
use crate::error::ApiResult;
use crate::extractors::ValidatedForm;
use crate::state::AppState;
use crate::view::FormView;

/// GET /form
pub async fn form_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let view = FormView::new(&state.config.app);
    Ok(Html(state.views.render(&view)?))
}

/// POST /form
pub async fn form_submit(
    State(state): State<AppState>,
    ValidatedForm(req): ValidatedForm<TextRequest>,
) -> ApiResult<Html<String>> {
    let text = req.into_text();
    let batch = state.generator.generate_default(&text);
    let view = FormView::new(&state.config.app).with_result(text, batch);
    Ok(Html(state.views.render(&view)?))
}
