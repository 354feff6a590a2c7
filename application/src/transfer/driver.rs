use uuid::Uuid;

use kernel::prelude::entity::{DestructDriver, Driver};

#[derive(Debug, Clone, PartialEq)]
pub struct DriverDto {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub license_number: String,
    pub experience_years: i32,
    pub rating: f64,
}

impl From<Driver> for DriverDto {
    fn from(value: Driver) -> Self {
        let DestructDriver {
            id,
            name,
            phone_number,
            license_number,
            experience_years,
            rating,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
            license_number: license_number.into(),
            experience_years: experience_years.into(),
            rating: rating.into(),
        }
    }
}
