use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    SqlX(sqlx::Error),
    #[error(transparent)]
    Http(reqwest::Error),
    #[error(transparent)]
    Jwt(jsonwebtoken::errors::Error),
    #[error(transparent)]
    Serde(serde_json::Error),
    #[error(transparent)]
    Conversion(anyhow::Error),
}

impl From<sqlx::Error> for DriverError {
    fn from(value: sqlx::Error) -> Self {
        Self::SqlX(value)
    }
}

impl From<reqwest::Error> for DriverError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<jsonwebtoken::errors::Error> for DriverError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            DriverError::SqlX(sqlx::Error::PoolTimedOut) => {
                Report::new(error).change_context(KernelError::Timeout)
            }
            DriverError::SqlX(_) => Report::new(error).change_context(KernelError::Persistence),
            DriverError::Http(_) => Report::new(error).change_context(KernelError::ExternalService),
            DriverError::Jwt(_) => Report::new(error).change_context(KernelError::Unauthorized),
            _ => Report::new(error).change_context(KernelError::Internal),
        })
    }
}

impl<T> ConvertError for Result<T, sqlx::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(DriverError::from).convert_error()
    }
}
