use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error envelope returned to clients: `{"msg": "..."}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorMessage {
    pub msg: String,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub msg: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self { status, msg: msg.into() }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorMessage { msg: self.msg })).into_response()
    }
}

/// Client-input failures become 400 with a fixed message; storage failures
/// become 500 and their details stay in the logs.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::StoreNameCannotBeEmpty => {
                warn!(err = %e, "rejecting store request");
                Self::bad_request("name cannot be empty")
            }
            ServiceError::StoreNotFound(_) | ServiceError::ModelNotFound(_) => {
                warn!(err = %e, "rejecting store request");
                Self::bad_request("store not found")
            }
            ServiceError::Model(models::errors::ModelError::Validation(msg)) => {
                warn!(err = %msg, "rejecting store request");
                Self::bad_request(msg)
            }
            ServiceError::Db(_) | ServiceError::Model(models::errors::ModelError::Db(_)) => {
                error!(err = %e, "store operation failed");
                Self::internal()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
