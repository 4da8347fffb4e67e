use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use places::payloads::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::{database::StoreError, loader::LoadError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Missing required fields: name, description, category, location")]
    MissingFields,

    #[error("Place not found")]
    NotFound,

    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Failed to load maps script")]
    Script(#[from] LoadError),
}

impl AppError {
    /// Wraps a store failure; only `context` reaches the client.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| {
            error!("{context}: {source}");
            AppError::Store { context, source }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store { .. } | AppError::Script(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
