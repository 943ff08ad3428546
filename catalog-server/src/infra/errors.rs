use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use catalog_core::CatalogError;

pub type AppResult<T> = Result<T, AppError>;

/// Error body for the operational endpoints. Catalog endpoints answer
/// failures with a bare status instead.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => {
                Self::new(StatusCode::NOT_FOUND, msg)
            }
            CatalogError::Database(err) => {
                tracing::error!(error = ?err, "database operation failed");
                Self::service_unavailable("Database unavailable")
            }
            other => Self::internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_map_to_service_unavailable() {
        let err = AppError::from(CatalogError::Database(
            sqlx::Error::PoolClosed,
        ));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Database unavailable");
    }

    #[test]
    fn not_found_keeps_its_message() {
        let err = AppError::from(CatalogError::not_found("catalog item", 9));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "catalog item 9");
    }
}
