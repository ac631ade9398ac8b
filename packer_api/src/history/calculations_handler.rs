use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use packer_history::CalculationRecord;

use crate::{
    error::ApiError,
    pagination::{PaginatedResponse, Pagination},
    state::AppState,
};

pub async fn calculations_handler(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResponse<CalculationRecord>>, ApiError> {
    let records = state.history.list(
        pagination.limit() as usize,
        pagination.offset() as usize,
    )?;
    let total = state.history.count()?;

    Ok(Json(PaginatedResponse::new(records, &pagination, total)))
}
