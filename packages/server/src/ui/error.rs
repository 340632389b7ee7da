//! HTTP error responses.
//!
//! Every failure leaves the server as `{"message": ...}` JSON. Internal errors
//! are logged here and answered with a fixed message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::ValueObjectError,
    infrastructure::dto::http::MessageDto,
    usecase::{
        ClassifiedError, CreateRoomError, ErrorKind, JoinRoomError, RoomLookupError,
        SubmitVoteError,
    },
};

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Error returned by the HTTP handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Map a use case error to its response by kind
    fn from_classified(error: impl ClassifiedError) -> Self {
        match error.kind() {
            ErrorKind::Conflict => {
                tracing::warn!("Rejected request: {}", error);
                Self::bad_request(error.to_string())
            }
            ErrorKind::NotFound => {
                tracing::warn!("Rejected request: {}", error);
                Self::new(StatusCode::NOT_FOUND, error.to_string())
            }
            ErrorKind::Internal => {
                tracing::error!("Internal error: {}", error);
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageDto::new(self.message))).into_response()
    }
}

impl From<CreateRoomError> for ApiError {
    fn from(error: CreateRoomError) -> Self {
        Self::from_classified(error)
    }
}

impl From<JoinRoomError> for ApiError {
    fn from(error: JoinRoomError) -> Self {
        Self::from_classified(error)
    }
}

impl From<SubmitVoteError> for ApiError {
    fn from(error: SubmitVoteError) -> Self {
        Self::from_classified(error)
    }
}

impl From<RoomLookupError> for ApiError {
    fn from(error: RoomLookupError) -> Self {
        Self::from_classified(error)
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(error: ValueObjectError) -> Self {
        tracing::warn!("Invalid request value: {}", error);
        Self::bad_request(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Invalid JSON body: {}", rejection.body_text());
        Self::bad_request(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        tracing::warn!("Invalid JSON body: {}", error);
        Self::bad_request(format!("Invalid JSON body: {error}"))
    }
}
