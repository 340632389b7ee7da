//! Request extractors.

use axum::extract::FromRequest;

use crate::ui::error::ApiError;

/// `axum::Json` whose rejection is answered with a JSON `{message}` body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
