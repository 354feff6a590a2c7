use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}
