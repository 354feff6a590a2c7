use error_stack::Report;
use kernel::KernelError;

pub mod database;
pub mod error;
pub mod http;
pub mod security;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key).map_err(|error| {
        Report::from(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("environment variable {key} is not set"))
    })
}
