mod catalog;
mod membership;
mod owner;
mod rental;
mod user;

pub use self::{catalog::*, membership::*, owner::*, rental::*, user::*};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Plain acknowledgement for endpoints whose whole effect is a state change.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
