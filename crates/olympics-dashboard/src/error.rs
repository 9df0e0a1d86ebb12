//! HTTP-facing error type

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use olympics_common::DashboardError;
use serde_json::json;
use tracing::{error, warn};

/// Errors returned by request handlers
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Failure in loading, aggregation or rendering
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// A rendering task did not finish
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Dashboard(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Dashboard(DashboardError::Validation { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(DashboardError::not_found("sport 'Curling'")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DashboardError::validation("empty sport")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DashboardError::graph("backend")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
