use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Encoded password hash, never the raw secret.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}
