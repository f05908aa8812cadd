use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::warn;

pub const MSG_PAYLOAD: &str = "Não foi possível obter o payload";
pub const MSG_ID: &str = "Não foi possível obter o id.";
pub const MSG_NOT_FOUND: &str = "Não foi possível encontrar o estudante";

/// Client-facing failure. Every variant of this API answers 400 with
/// `{"message_error": ...}`; `detail` only goes to the log.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn invalid_payload(detail: impl ToString) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: MSG_PAYLOAD, detail: detail.to_string() }
    }

    pub fn invalid_id(detail: impl ToString) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: MSG_ID, detail: detail.to_string() }
    }

    pub fn not_found(detail: impl ToString) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: MSG_NOT_FOUND, detail: detail.to_string() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::not_found(e),
            ServiceError::BadInput(_) => Self::invalid_payload(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, detail = %self.detail, "request rejected");
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
