use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    CarQuery, DependOnCarQuery, DependOnDriverQuery, DependOnPackageQuery, DriverQuery,
    PackageQuery,
};
use kernel::KernelError;

use crate::transfer::{CarDto, DriverDto, PackageDto};

#[async_trait::async_trait]
pub trait CatalogService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnCarQuery
    + DependOnDriverQuery
    + DependOnPackageQuery
{
    /// Cars with at least one unit in stock; sold-out models are omitted.
    async fn get_available_cars(&self) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let cars = self.car_query().find_available(&mut con).await?;
        Ok(cars.into_iter().map(CarDto::from).collect())
    }

    async fn get_drivers(&self) -> error_stack::Result<Vec<DriverDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let drivers = self.driver_query().get_all(&mut con).await?;
        Ok(drivers.into_iter().map(DriverDto::from).collect())
    }

    async fn get_packages(&self) -> error_stack::Result<Vec<PackageDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let packages = self.package_query().get_all(&mut con).await?;
        Ok(packages.into_iter().map(PackageDto::from).collect())
    }
}

impl<T> CatalogService for T where
    T: DependOnDatabaseConnection + DependOnCarQuery + DependOnDriverQuery + DependOnPackageQuery
{
}
