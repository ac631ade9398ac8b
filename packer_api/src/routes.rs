use std::sync::Arc;

use aide::axum::{
    ApiRouter,
    routing::{get, post},
};

use crate::{
    calculator::{calculate_handler::calculate_handler, optimize_handler::optimize_handler},
    history::{calculations_handler::calculations_handler, history_handler::history_handler},
    state::AppState,
};

pub fn api_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .route("/calculate", axum::routing::post(calculate_handler))
        .route("/history", axum::routing::get(history_handler))
        .api_route("/optimize", post(optimize_handler))
        .api_route("/calculations", get(calculations_handler))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
