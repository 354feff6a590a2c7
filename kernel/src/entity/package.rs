mod cost;
mod description;
mod id;
mod name;

pub use self::{cost::*, description::*, id::*, name::*};
use destructure::Destructure;
use vodca::References;

/// Flat-priced event add-on (weddings, corporate transport and the like).
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct EventPackage {
    id: PackageId,
    name: PackageName,
    description: PackageDescription,
    cost: PackageCost,
}

impl EventPackage {
    pub fn new(
        id: PackageId,
        name: PackageName,
        description: PackageDescription,
        cost: PackageCost,
    ) -> Self {
        Self {
            id,
            name,
            description,
            cost,
        }
    }
}
