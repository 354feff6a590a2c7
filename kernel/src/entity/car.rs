mod id;
mod name;
mod profile;
mod rate;
mod stock;

pub use self::{id::*, name::*, profile::*, rate::*, stock::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Car {
    id: CarId,
    name: CarName,
    stock: CarStock,
    daily_rate: DailyRate,
    profile: CarProfile,
}

impl Car {
    pub fn new(
        id: CarId,
        name: CarName,
        stock: CarStock,
        daily_rate: DailyRate,
        profile: CarProfile,
    ) -> Self {
        Self {
            id,
            name,
            stock,
            daily_rate,
            profile,
        }
    }
}
