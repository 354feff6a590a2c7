use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PickupLocation(String);

impl PickupLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DropoffLocation(String);

impl DropoffLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}
