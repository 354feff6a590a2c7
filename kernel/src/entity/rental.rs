mod cost;
mod id;
mod location;
mod quote;
mod status;

pub use self::{cost::*, id::*, location::*, quote::*, status::*};
use crate::entity::car::CarId;
use crate::entity::common::RentalPeriod;
use crate::entity::driver::DriverId;
use crate::entity::package::PackageId;
use crate::entity::user::UserId;
use destructure::Destructure;
use vodca::References;

/// One customer's booking of one car over a date range.
///
/// The total cost is fixed when the rental is created and never recomputed;
/// rentals are never deleted, only moved through their status lifecycle.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Rental {
    id: RentalId,
    user_id: UserId,
    car_id: CarId,
    driver_id: Option<DriverId>,
    package_id: Option<PackageId>,
    period: RentalPeriod,
    pickup_location: Option<PickupLocation>,
    dropoff_location: Option<DropoffLocation>,
    airport_transfer: bool,
    concierge_services: bool,
    total_cost: TotalCost,
    status: RentalStatus,
}

impl Rental {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RentalId,
        user_id: UserId,
        car_id: CarId,
        driver_id: Option<DriverId>,
        package_id: Option<PackageId>,
        period: RentalPeriod,
        pickup_location: Option<PickupLocation>,
        dropoff_location: Option<DropoffLocation>,
        airport_transfer: bool,
        concierge_services: bool,
        total_cost: TotalCost,
        status: RentalStatus,
    ) -> Self {
        Self {
            id,
            user_id,
            car_id,
            driver_id,
            package_id,
            period,
            pickup_location,
            dropoff_location,
            airport_transfer,
            concierge_services,
            total_cost,
            status,
        }
    }
}
