use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DriverName(String);

impl DriverName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
