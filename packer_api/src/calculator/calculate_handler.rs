use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::{HeaderName, HeaderValue, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use packer_history::NewCalculation;
use packer_optimizer::parsers::{parse_amount, parse_pack_sizes};
use serde::Deserialize;

use crate::state::AppState;

use super::{
    calculate::calculate,
    render::{allocation_fragment, error_fragment},
};

const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

#[derive(Deserialize)]
pub struct CalculateForm {
    #[serde(rename = "packSizes", default)]
    pack_sizes: String,
    #[serde(default)]
    amount: String,
}

fn html(body: String) -> Response {
    ([(CONTENT_TYPE, HeaderValue::from_static("text/html"))], body).into_response()
}

/// Renders an HTML fragment for the calculator form. Every outcome, including
/// invalid input, is a `200` so the fragment is swapped into the page.
pub async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CalculateForm>,
) -> Response {
    let pack_sizes = match parse_pack_sizes(&form.pack_sizes) {
        Ok(pack_sizes) => pack_sizes,
        Err(error) => return html(error_fragment(&error.to_string())),
    };

    let amount = match parse_amount(&form.amount) {
        Ok(amount) => amount,
        Err(error) => return html(error_fragment(&error.to_string())),
    };

    let allocation = match calculate(pack_sizes, amount, state.max_amount).await {
        Ok(allocation) => allocation,
        Err(error) => return html(error_fragment(&format!("Calculation error: {error}"))),
    };

    // The history panel refreshes on `calculation-done`, so the record must exist first.
    state
        .record(NewCalculation::from_allocation(
            form.pack_sizes,
            amount.unsigned_abs(),
            &allocation,
        ))
        .await;

    let mut response = html(allocation_fragment(amount, &allocation));
    response
        .headers_mut()
        .insert(HX_TRIGGER, HeaderValue::from_static("calculation-done"));

    response
}
