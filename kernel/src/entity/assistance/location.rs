use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AssistanceLocation(String);

impl AssistanceLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}
