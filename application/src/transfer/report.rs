use time::OffsetDateTime;

/// One rental joined with its customer, car, and optional driver and package,
/// plus the pre-rendered duration and cost breakdown strings.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalReportDto {
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub car_name: String,
    pub car_category: String,
    pub car_make: String,
    pub car_model: String,
    pub car_transmission: String,
    pub car_year: i32,
    pub car_fuel_type: String,
    pub car_class: String,
    pub driver_name: String,
    pub driver_phone_number: String,
    pub package_name: String,
    pub package_description: String,
    pub rental_date: OffsetDateTime,
    pub return_date: OffsetDateTime,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub duration: String,
    pub cost_details: String,
    pub status: String,
    pub concierge_services: bool,
    pub airport_transfer: bool,
}
