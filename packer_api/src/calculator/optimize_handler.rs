use std::sync::Arc;

use axum::{Json, extract::State};
use packer_history::NewCalculation;
use packer_optimizer::json::types::{JsonAllocation, JsonPackRequest};

use crate::{error::ApiError, state::AppState};

use super::calculate::calculate;

pub async fn optimize_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonPackRequest>,
) -> Result<Json<JsonAllocation>, ApiError> {
    let pack_sizes = body
        .pack_sizes
        .iter()
        .map(|size| size.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let allocation = calculate(body.pack_sizes, body.amount, state.max_amount).await?;

    state
        .record(NewCalculation::from_allocation(
            pack_sizes,
            body.amount.unsigned_abs(),
            &allocation,
        ))
        .await;

    Ok(Json(JsonAllocation::from(&allocation)))
}
