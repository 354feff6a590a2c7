use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Validation,
    Unauthorized,
    PermissionDenied,
    NotFound,
    AlreadyExists,
    OutOfStock,
    InvalidStateTransition,
    ExternalService,
    Persistence,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::Unauthorized => write!(f, "Authentication required"),
            KernelError::PermissionDenied => write!(f, "Permission denied"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::AlreadyExists => write!(f, "Entity already exists"),
            KernelError::OutOfStock => write!(f, "Car is out of stock"),
            KernelError::InvalidStateTransition => write!(f, "Invalid rental status transition"),
            KernelError::ExternalService => write!(f, "External service failure"),
            KernelError::Persistence => write!(f, "Persistence failure"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

#[cfg(test)]
mod test {
    use error_stack::Report;

    use super::KernelError;

    // Callers match on the context to pick a response, so variants must
    // compare by value through a `Report`.
    #[test]
    fn context_compares_by_variant() {
        let report = Report::new(KernelError::OutOfStock).attach_printable("current stock: 0");
        assert_eq!(report.current_context(), &KernelError::OutOfStock);
        assert_ne!(report.current_context(), &KernelError::NotFound);
    }
}
