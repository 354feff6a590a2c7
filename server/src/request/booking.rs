use crate::controller::Intake;
use application::transfer::{CallAssistanceDto, CreateBookingDto, MakePaymentDto};
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    car_id: Uuid,
    driver_id: Option<Uuid>,
    package_id: Option<Uuid>,
    rental_date: OffsetDateTime,
    return_date: OffsetDateTime,
    pickup_location: Option<String>,
    dropoff_location: Option<String>,
    #[serde(default)]
    airport_transfer: bool,
    #[serde(default)]
    concierge_services: bool,
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    rental_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CallAssistanceRequest {
    rental_id: Uuid,
    description: String,
    location: String,
}

pub struct BookingTransformer;

impl Intake<(Uuid, BookingRequest)> for BookingTransformer {
    type To = CreateBookingDto;
    fn emit(&self, (user_id, req): (Uuid, BookingRequest)) -> Self::To {
        CreateBookingDto {
            user_id,
            car_id: req.car_id,
            driver_id: req.driver_id,
            package_id: req.package_id,
            rental_date: req.rental_date,
            return_date: req.return_date,
            pickup_location: req.pickup_location,
            dropoff_location: req.dropoff_location,
            airport_transfer: req.airport_transfer,
            concierge_services: req.concierge_services,
        }
    }
}

impl Intake<(Uuid, PaymentRequest)> for BookingTransformer {
    type To = MakePaymentDto;
    fn emit(&self, (user_id, req): (Uuid, PaymentRequest)) -> Self::To {
        MakePaymentDto {
            user_id,
            rental_id: req.rental_id,
        }
    }
}

impl Intake<(Uuid, CallAssistanceRequest)> for BookingTransformer {
    type To = CallAssistanceDto;
    fn emit(&self, (user_id, req): (Uuid, CallAssistanceRequest)) -> Self::To {
        CallAssistanceDto {
            user_id,
            rental_id: req.rental_id,
            description: req.description,
            location: req.location,
        }
    }
}
