use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::json;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    // The most recent printable attachment is the most specific description
    // of what went wrong; the context display is the fallback.
    fn message(&self) -> String {
        self.0
            .frames()
            .find_map(|frame| {
                frame
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| frame.downcast_ref::<&'static str>().copied())
            })
            .map(str::to_string)
            .unwrap_or_else(|| self.0.current_context().to_string())
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.current_context() {
            KernelError::Validation => StatusCode::BAD_REQUEST,
            KernelError::Unauthorized => StatusCode::UNAUTHORIZED,
            KernelError::PermissionDenied => StatusCode::FORBIDDEN,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::AlreadyExists
            | KernelError::OutOfStock
            | KernelError::InvalidStateTransition => StatusCode::CONFLICT,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::ExternalService => StatusCode::BAD_GATEWAY,
            KernelError::Persistence | KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        }
        let message = self.message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}
