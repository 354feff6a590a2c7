use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct LicenseNumber(String);

impl LicenseNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}
