use uuid::Uuid;

use kernel::prelude::entity::{Car, DestructCar};

#[derive(Debug, Clone, PartialEq)]
pub struct CarDto {
    pub id: Uuid,
    pub name: String,
    pub stock_availability: i32,
    pub rental_costs: f64,
    pub category: String,
    pub make: String,
    pub model: String,
    pub transmission: String,
    pub year: i32,
    pub fuel_type: String,
    pub class: String,
}

impl From<Car> for CarDto {
    fn from(value: Car) -> Self {
        let DestructCar {
            id,
            name,
            stock,
            daily_rate,
            profile,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            stock_availability: stock.into(),
            rental_costs: daily_rate.into(),
            category: profile.category().clone(),
            make: profile.make().clone(),
            model: profile.model().clone(),
            transmission: profile.transmission().clone(),
            year: *profile.year(),
            fuel_type: profile.fuel_type().clone(),
            class: profile.class().clone(),
        }
    }
}
