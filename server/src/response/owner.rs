use crate::controller::Exhaust;
use crate::response::MessageResponse;
use application::transfer::RentalReportDto;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    email: String,
    phone_number: String,
    address: String,
    car_name: String,
    car_category: String,
    car_make: String,
    car_model: String,
    car_transmission: String,
    car_year: i32,
    car_fuel_type: String,
    car_class: String,
    driver_name: String,
    driver_phone_number: String,
    package_name: String,
    package_description: String,
    rental_date: OffsetDateTime,
    return_date: OffsetDateTime,
    pickup_location: Option<String>,
    dropoff_location: Option<String>,
    duration: String,
    cost_details: String,
    status: String,
    concierge_services: bool,
    airport_transfer: bool,
}

impl From<RentalReportDto> for ReportResponse {
    fn from(value: RentalReportDto) -> Self {
        Self {
            email: value.email,
            phone_number: value.phone_number,
            address: value.address,
            car_name: value.car_name,
            car_category: value.car_category,
            car_make: value.car_make,
            car_model: value.car_model,
            car_transmission: value.car_transmission,
            car_year: value.car_year,
            car_fuel_type: value.car_fuel_type,
            car_class: value.car_class,
            driver_name: value.driver_name,
            driver_phone_number: value.driver_phone_number,
            package_name: value.package_name,
            package_description: value.package_description,
            rental_date: value.rental_date,
            return_date: value.return_date,
            pickup_location: value.pickup_location,
            dropoff_location: value.dropoff_location,
            duration: value.duration,
            cost_details: value.cost_details,
            status: value.status,
            concierge_services: value.concierge_services,
            airport_transfer: value.airport_transfer,
        }
    }
}

pub struct ReportPresenter;

impl Exhaust<Vec<RentalReportDto>> for ReportPresenter {
    type To = axum::Json<Vec<ReportResponse>>;
    fn emit(&self, input: Vec<RentalReportDto>) -> Self::To {
        axum::Json(input.into_iter().map(ReportResponse::from).collect())
    }
}

pub struct ApprovalPresenter;

impl Exhaust<()> for ApprovalPresenter {
    type To = MessageResponse;
    fn emit(&self, _: ()) -> Self::To {
        MessageResponse::new("booking processed")
    }
}
