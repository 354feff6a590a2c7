use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalId(Uuid);

impl RentalId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
