use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Closed set of account roles. New roles must be added here so every
/// authorization check matches exhaustively.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Owner,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Owner => "owner",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl FromStr for UserRole {
    type Err = Report<KernelError>;

    fn from_str(role: &str) -> Result<Self, Self::Err> {
        match role {
            "user" => Ok(UserRole::User),
            "owner" => Ok(UserRole::Owner),
            other => Err(Report::new(KernelError::Validation)
                .attach_printable(format!("unknown role: {other}"))),
        }
    }
}
