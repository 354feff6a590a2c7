use crate::controller::Exhaust;
use application::transfer::{CarDto, DriverDto, PackageDto};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CarResponse {
    id: Uuid,
    name: String,
    stock_availability: i32,
    rental_costs: f64,
    category: String,
    make: String,
    model: String,
    transmission: String,
    year: i32,
    fuel_type: String,
    class: String,
}

impl From<CarDto> for CarResponse {
    fn from(value: CarDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            stock_availability: value.stock_availability,
            rental_costs: value.rental_costs,
            category: value.category,
            make: value.make,
            model: value.model,
            transmission: value.transmission,
            year: value.year,
            fuel_type: value.fuel_type,
            class: value.class,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DriverResponse {
    id: Uuid,
    name: String,
    phone_number: String,
    license_number: String,
    experience_years: i32,
    rating: f64,
}

impl From<DriverDto> for DriverResponse {
    fn from(value: DriverDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            phone_number: value.phone_number,
            license_number: value.license_number,
            experience_years: value.experience_years,
            rating: value.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PackageResponse {
    id: Uuid,
    package_name: String,
    description: String,
    cost: f64,
}

impl From<PackageDto> for PackageResponse {
    fn from(value: PackageDto) -> Self {
        Self {
            id: value.id,
            package_name: value.package_name,
            description: value.description,
            cost: value.cost,
        }
    }
}

pub struct CatalogPresenter;

impl Exhaust<Vec<CarDto>> for CatalogPresenter {
    type To = axum::Json<Vec<CarResponse>>;
    fn emit(&self, input: Vec<CarDto>) -> Self::To {
        axum::Json(input.into_iter().map(CarResponse::from).collect())
    }
}

impl Exhaust<Vec<DriverDto>> for CatalogPresenter {
    type To = axum::Json<Vec<DriverResponse>>;
    fn emit(&self, input: Vec<DriverDto>) -> Self::To {
        axum::Json(input.into_iter().map(DriverResponse::from).collect())
    }
}

impl Exhaust<Vec<PackageDto>> for CatalogPresenter {
    type To = axum::Json<Vec<PackageResponse>>;
    fn emit(&self, input: Vec<PackageDto>) -> Self::To {
        axum::Json(input.into_iter().map(PackageResponse::from).collect())
    }
}
