//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::config::ConfigError;
use crate::pricing::responses::ErrorResponse;
use crate::pricing::{PricingError, TableError};
use crate::share::ShareError;
use crate::telemetry::TelemetryError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("Price table error: {0}")]
    Tables(#[from] TableError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Pricing(PricingError::CatalogMismatch { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "catalog_mismatch")
            }
            AppError::Pricing(PricingError::InvalidTables(_)) | AppError::Tables(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "price_tables")
            }
            AppError::Share(_) => (StatusCode::INTERNAL_SERVER_ERROR, "share"),
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let message = if status.is_server_error() {
            tracing::error!("{}", self);
            "Internal error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error_type: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
