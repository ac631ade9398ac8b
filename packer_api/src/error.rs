use aide::OperationOutput;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use packer_history::HistoryError;

use crate::calculator::calculate::CalculateError;

pub enum ApiError {
    BadRequest(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl From<HistoryError> for ApiError {
    fn from(error: HistoryError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<CalculateError> for ApiError {
    fn from(error: CalculateError) -> Self {
        match error {
            CalculateError::Optimize(error) if error.is_infeasible() => {
                ApiError::UnprocessableEntity(error.to_string())
            }
            CalculateError::Optimize(_) | CalculateError::AmountAboveLimit(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CalculateError::Task(_) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::UnprocessableEntity(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
        }
    }
}

impl OperationOutput for ApiError {
    type Inner = String;
}

#[cfg(test)]
mod tests {
    use packer_optimizer::OptimizeError;

    use super::*;

    fn status_of(error: impl Into<ApiError>) -> StatusCode {
        error.into().into_response().status()
    }

    #[test]
    fn test_calculate_error_status() {
        assert_eq!(
            status_of(CalculateError::Optimize(OptimizeError::Infeasible)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(CalculateError::Optimize(OptimizeError::EmptyPackSizes)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CalculateError::AmountAboveLimit(1_000)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_history_error_status() {
        let error = HistoryError::Io(std::io::Error::other("disk full"));

        assert_eq!(status_of(error), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
