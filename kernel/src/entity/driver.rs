mod experience;
mod id;
mod license;
mod name;
mod rating;

pub use self::{experience::*, id::*, license::*, name::*, rating::*};
use crate::entity::common::PhoneNumber;
use destructure::Destructure;
use vodca::References;

/// Chauffeur offered alongside the fleet, billed per rental day.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Driver {
    id: DriverId,
    name: DriverName,
    phone_number: PhoneNumber,
    license_number: LicenseNumber,
    experience_years: ExperienceYears,
    rating: DriverRating,
}

impl Driver {
    pub fn new(
        id: DriverId,
        name: DriverName,
        phone_number: PhoneNumber,
        license_number: LicenseNumber,
        experience_years: ExperienceYears,
        rating: DriverRating,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            license_number,
            experience_years,
            rating,
        }
    }
}
