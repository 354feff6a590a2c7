use uuid::Uuid;

use kernel::prelude::entity::{DestructEventPackage, EventPackage};

#[derive(Debug, Clone, PartialEq)]
pub struct PackageDto {
    pub id: Uuid,
    pub package_name: String,
    pub description: String,
    pub cost: f64,
}

impl From<EventPackage> for PackageDto {
    fn from(value: EventPackage) -> Self {
        let DestructEventPackage {
            id,
            name,
            description,
            cost,
        } = value.into_destruct();
        Self {
            id: id.into(),
            package_name: name.into(),
            description: description.into(),
            cost: cost.into(),
        }
    }
}
