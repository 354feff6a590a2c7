use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AssistanceId(Uuid);

impl AssistanceId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
