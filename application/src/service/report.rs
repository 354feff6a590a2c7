use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    CarQuery, DependOnCarQuery, DependOnDriverQuery, DependOnPackageQuery, DependOnRentalQuery,
    DependOnUserQuery, DriverQuery, PackageQuery, RentalQuery, UserQuery,
};
use kernel::prelude::entity::{
    UserId, UserRole, AIRPORT_TRANSFER_FEE, CONCIERGE_FEE, DRIVER_DAILY_FEE,
};
use kernel::KernelError;

use crate::transfer::RentalReportDto;

#[async_trait::async_trait]
pub trait ReportService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnUserQuery
    + DependOnCarQuery
    + DependOnDriverQuery
    + DependOnPackageQuery
    + DependOnRentalQuery
{
    /// Owner-only listing of every rental joined with its customer, car, and
    /// optional driver and package, with rendered duration and cost strings.
    async fn rental_report(
        &self,
        acting_user_id: Uuid,
    ) -> error_stack::Result<Vec<RentalReportDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let acting = self
            .user_query()
            .find_by_id(&mut con, &UserId::new(acting_user_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        if acting.role() != &UserRole::Owner {
            return Err(Report::new(KernelError::PermissionDenied)
                .attach_printable("only owners can generate reports"));
        }

        let rentals = self.rental_query().get_all(&mut con).await?;
        let mut reports = Vec::with_capacity(rentals.len());

        for rental in rentals {
            let customer = self
                .user_query()
                .find_by_id(&mut con, rental.user_id())
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::NotFound)
                        .attach_printable("user not found for rental history")
                })?;
            let car = self
                .car_query()
                .find_by_id(&mut con, rental.car_id())
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::NotFound)
                        .attach_printable("car not found for rental history")
                })?;
            let driver = match rental.driver_id() {
                Some(id) => self.driver_query().find_by_id(&mut con, id).await?,
                None => None,
            };
            let package = match rental.package_id() {
                Some(id) => self.package_query().find_by_id(&mut con, id).await?,
                None => None,
            };

            let days = rental.period().days();
            let duration = format!("{days:.0} days");

            let mut cost_details = format!(
                "Total Cost for {}: {:.2}",
                duration,
                car.daily_rate().as_ref() * days
            );
            if *rental.airport_transfer() {
                cost_details += &format!(" + Airport Transfer: {AIRPORT_TRANSFER_FEE}");
            }
            if *rental.concierge_services() {
                cost_details += &format!(" + Concierge Services: {CONCIERGE_FEE}");
            }
            if rental.driver_id().is_some() {
                cost_details += &format!(" + Driver: {:.2}", days * DRIVER_DAILY_FEE);
            }
            if let Some(package) = &package {
                cost_details += &format!(" + Package: {:.2}", package.cost().as_ref());
            }
            cost_details += &format!(" = Total: {:.2}", rental.total_cost().as_ref());

            let profile = car.profile();
            reports.push(RentalReportDto {
                email: customer.email().as_ref().clone(),
                phone_number: customer.phone_number().as_ref().clone(),
                address: customer.address().as_ref().clone(),
                car_name: car.name().as_ref().clone(),
                car_category: profile.category().clone(),
                car_make: profile.make().clone(),
                car_model: profile.model().clone(),
                car_transmission: profile.transmission().clone(),
                car_year: *profile.year(),
                car_fuel_type: profile.fuel_type().clone(),
                car_class: profile.class().clone(),
                driver_name: driver
                    .as_ref()
                    .map(|d| d.name().as_ref().clone())
                    .unwrap_or_default(),
                driver_phone_number: driver
                    .as_ref()
                    .map(|d| d.phone_number().as_ref().clone())
                    .unwrap_or_default(),
                package_name: package
                    .as_ref()
                    .map(|p| p.name().as_ref().clone())
                    .unwrap_or_default(),
                package_description: package
                    .as_ref()
                    .map(|p| p.description().as_ref().clone())
                    .unwrap_or_default(),
                rental_date: *rental.period().starts_at(),
                return_date: *rental.period().ends_at(),
                pickup_location: rental
                    .pickup_location()
                    .as_ref()
                    .map(|l| l.as_ref().clone()),
                dropoff_location: rental
                    .dropoff_location()
                    .as_ref()
                    .map(|l| l.as_ref().clone()),
                duration,
                cost_details,
                status: rental.status().as_str().to_string(),
                concierge_services: *rental.concierge_services(),
                airport_transfer: *rental.airport_transfer(),
            });
        }

        Ok(reports)
    }
}

impl<T> ReportService for T where
    T: DependOnDatabaseConnection
        + DependOnUserQuery
        + DependOnCarQuery
        + DependOnDriverQuery
        + DependOnPackageQuery
        + DependOnRentalQuery
{
}
