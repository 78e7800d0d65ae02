//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quarks_core::error::{BacktestError, DataError, StrategyError};
use serde_json::json;

/// Error returned to API clients as `{ "error": <message> }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// A 400 response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A 500 response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NoData { .. } | DataError::InvalidRange { .. } => {
                ApiError::bad_request(err.to_string())
            }
            DataError::Request(_) | DataError::Parse(_) => ApiError::internal(err.to_string()),
        }
    }
}

impl From<StrategyError> for ApiError {
    fn from(err: StrategyError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<BacktestError> for ApiError {
    fn from(err: BacktestError) -> Self {
        match err {
            BacktestError::EmptySeries => ApiError::bad_request(err.to_string()),
            BacktestError::InvalidConfig(_) => ApiError::bad_request(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_maps_to_bad_request() {
        let err: ApiError = DataError::NoData {
            symbol: "AAPL".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "No data found for AAPL");
    }

    #[test]
    fn test_request_failure_maps_to_internal() {
        let err: ApiError = DataError::Request("timeout".to_string()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
