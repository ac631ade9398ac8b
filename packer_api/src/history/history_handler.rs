use std::sync::Arc;

use axum::{extract::State, response::Html};
use tracing::error;

use crate::{error::ApiError, state::AppState};

use super::render::history_fragment;

const HISTORY_LIMIT: usize = 50;

pub async fn history_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let records = state.history.list(HISTORY_LIMIT, 0).map_err(|error| {
        error!(%error, "failed to load history");
        ApiError::InternalServerError(String::from("Failed to load history"))
    })?;

    Ok(Html(history_fragment(&records)))
}
