use crate::controller::Exhaust;
use crate::response::MessageResponse;
use application::transfer::{AssistanceDto, RentalDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    rental_id: Uuid,
    user_id: Uuid,
    car_id: Uuid,
    driver_id: Option<Uuid>,
    package_id: Option<Uuid>,
    rental_date: OffsetDateTime,
    return_date: OffsetDateTime,
    pickup_location: Option<String>,
    dropoff_location: Option<String>,
    airport_transfer: bool,
    concierge_services: bool,
    total_cost: f64,
    status: String,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            rental_id: value.rental_id,
            user_id: value.user_id,
            car_id: value.car_id,
            driver_id: value.driver_id,
            package_id: value.package_id,
            rental_date: value.rental_date,
            return_date: value.return_date,
            pickup_location: value.pickup_location,
            dropoff_location: value.dropoff_location,
            airport_transfer: value.airport_transfer,
            concierge_services: value.concierge_services,
            total_cost: value.total_cost,
            status: value.status,
        }
    }
}

#[derive(Debug)]
pub struct BookedRentalResponse(RentalResponse);

impl IntoResponse for BookedRentalResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct AssistanceResponse {
    assistance_id: Uuid,
    rental_id: Uuid,
    user_id: Uuid,
    requested_at: OffsetDateTime,
    description: String,
    location: String,
    location_link: String,
}

impl From<AssistanceDto> for AssistanceResponse {
    fn from(value: AssistanceDto) -> Self {
        Self {
            assistance_id: value.assistance_id,
            rental_id: value.rental_id,
            user_id: value.user_id,
            requested_at: value.requested_at,
            description: value.description,
            location: value.location,
            location_link: value.location_link,
        }
    }
}

#[derive(Debug)]
pub struct CreatedAssistanceResponse(AssistanceResponse);

impl IntoResponse for CreatedAssistanceResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}

pub struct BookingPresenter;

impl Exhaust<RentalDto> for BookingPresenter {
    type To = BookedRentalResponse;
    fn emit(&self, input: RentalDto) -> Self::To {
        BookedRentalResponse(RentalResponse::from(input))
    }
}

impl Exhaust<AssistanceDto> for BookingPresenter {
    type To = CreatedAssistanceResponse;
    fn emit(&self, input: AssistanceDto) -> Self::To {
        CreatedAssistanceResponse(AssistanceResponse::from(input))
    }
}

pub struct PaymentPresenter;

impl Exhaust<()> for PaymentPresenter {
    type To = MessageResponse;
    fn emit(&self, _: ()) -> Self::To {
        MessageResponse::new("payment completed, waiting for owner approval")
    }
}
