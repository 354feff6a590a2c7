use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AssistanceDescription(String);

impl AssistanceDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
