use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructRental, Rental};

#[derive(Debug, Clone, PartialEq)]
pub struct RentalDto {
    pub rental_id: Uuid,
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
    pub rental_date: OffsetDateTime,
    pub return_date: OffsetDateTime,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub airport_transfer: bool,
    pub concierge_services: bool,
    pub total_cost: f64,
    pub status: String,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
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
        } = value.into_destruct();
        Self {
            rental_id: id.into(),
            user_id: user_id.into(),
            car_id: car_id.into(),
            driver_id: driver_id.map(Into::into),
            package_id: package_id.map(Into::into),
            rental_date: *period.starts_at(),
            return_date: *period.ends_at(),
            pickup_location: pickup_location.map(Into::into),
            dropoff_location: dropoff_location.map(Into::into),
            airport_transfer,
            concierge_services,
            total_cost: total_cost.into(),
            status: status.as_str().to_string(),
        }
    }
}

pub struct CreateBookingDto {
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub package_id: Option<Uuid>,
    pub rental_date: OffsetDateTime,
    pub return_date: OffsetDateTime,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub airport_transfer: bool,
    pub concierge_services: bool,
}

pub struct MakePaymentDto {
    pub user_id: Uuid,
    pub rental_id: Uuid,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ApprovalAction {
    Approve,
    Reject,
}

pub struct ApproveBookingDto {
    pub acting_user_id: Uuid,
    pub rental_id: Uuid,
    pub action: ApprovalAction,
}
