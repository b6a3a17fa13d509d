//! Trip search handlers

use axum::{
    Form,
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::{PageError, status_for},
    state::AppState,
};

/// Search form fields
///
/// `to` is the field name used by older forms and links; `destination`
/// wins when both are sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl SearchForm {
    /// Destination field, falling back to the legacy `to` field
    pub fn destination(&self) -> &str {
        self.destination
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or(self.to.as_deref())
            .unwrap_or_default()
    }
}

/// Render the search form
pub async fn entry_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.renderer.render_entry_form()?))
}

/// Search submitted as query parameters
pub async fn search_query(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Result<Html<String>, PageError> {
    search(&state, &form).await
}

/// Search submitted as a url-encoded form
pub async fn search_form(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    search(&state, &form).await
}

async fn search(state: &AppState, form: &SearchForm) -> Result<Html<String>, PageError> {
    match state.service.resolve(&form.from, form.destination()).await {
        Ok(view) => Ok(Html(state.renderer.render_result(&view)?)),
        Err(failure) => {
            let status = status_for(failure.kind);
            info!(kind = %failure.kind, %status, "Rendering lookup failure");
            let page = state.renderer.render_error(&failure.message)?;
            Err(PageError::Lookup { status, page })
        },
    }
}
