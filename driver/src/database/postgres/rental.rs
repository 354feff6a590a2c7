use std::str::FromStr;

use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{
    CarId, DriverId, DropoffLocation, PackageId, PickupLocation, Rental, RentalId, RentalPeriod,
    RentalStatus, TotalCost, UserId,
};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery for PostgresRentalRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con.conn(), id)
            .await
            .convert_error()
    }

    async fn find_by_id_and_user(
        &self,
        con: &mut PostgresTransaction,
        id: &RentalId,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id_and_user(con.conn(), id, user_id)
            .await
            .convert_error()
    }

    async fn get_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        PgRentalInternal::get_all(con.conn()).await.convert_error()
    }
}

#[async_trait::async_trait]
impl RentalModifier for PostgresRentalRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con.conn(), rental)
            .await
            .convert_error()
    }

    async fn update_status(
        &self,
        con: &mut PostgresTransaction,
        id: &RentalId,
        status: RentalStatus,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::update_status(con.conn(), id, status)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
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

impl TryFrom<RentalRow> for Rental {
    type Error = DriverError;

    fn try_from(value: RentalRow) -> Result<Self, Self::Error> {
        let status = RentalStatus::from_str(&value.status).map_err(|_| {
            DriverError::Conversion(anyhow::anyhow!("unknown rental status: {}", value.status))
        })?;
        Ok(Rental::new(
            RentalId::new(value.rental_id),
            UserId::new(value.user_id),
            CarId::new(value.car_id),
            value.driver_id.map(DriverId::new),
            value.package_id.map(PackageId::new),
            RentalPeriod::from_raw(value.rental_date, value.return_date),
            value.pickup_location.map(PickupLocation::new),
            value.dropoff_location.map(DropoffLocation::new),
            value.airport_transfer,
            value.concierge_services,
            TotalCost::new(value.total_cost),
            status,
        ))
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RentalId,
    ) -> Result<Option<Rental>, DriverError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT rental_id, user_id, car_id, driver_id, package_id,
                   rental_date, return_date, pickup_location, dropoff_location,
                   airport_transfer, concierge_services, total_cost, status
            FROM rentals
            WHERE rental_id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Rental::try_from).transpose()
    }

    async fn find_by_id_and_user(
        con: &mut PgConnection,
        id: &RentalId,
        user_id: &UserId,
    ) -> Result<Option<Rental>, DriverError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT rental_id, user_id, car_id, driver_id, package_id,
                   rental_date, return_date, pickup_location, dropoff_location,
                   airport_transfer, concierge_services, total_cost, status
            FROM rentals
            WHERE rental_id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_ref())
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Rental::try_from).transpose()
    }

    async fn get_all(con: &mut PgConnection) -> Result<Vec<Rental>, DriverError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT rental_id, user_id, car_id, driver_id, package_id,
                   rental_date, return_date, pickup_location, dropoff_location,
                   airport_transfer, concierge_services, total_cost, status
            FROM rentals
            ORDER BY rental_date
            "#,
        )
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Rental::try_from).collect()
    }

    async fn create(con: &mut PgConnection, rental: &Rental) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO rentals (rental_id, user_id, car_id, driver_id, package_id,
                                 rental_date, return_date, pickup_location, dropoff_location,
                                 airport_transfer, concierge_services, total_cost, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.user_id().as_ref())
        .bind(rental.car_id().as_ref())
        .bind(rental.driver_id().as_ref().map(AsRef::as_ref))
        .bind(rental.package_id().as_ref().map(AsRef::as_ref))
        .bind(rental.period().starts_at())
        .bind(rental.period().ends_at())
        .bind(rental.pickup_location().as_ref().map(AsRef::as_ref))
        .bind(rental.dropoff_location().as_ref().map(AsRef::as_ref))
        .bind(rental.airport_transfer())
        .bind(rental.concierge_services())
        .bind(rental.total_cost().as_ref())
        .bind(rental.status().as_str())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update_status(
        con: &mut PgConnection,
        id: &RentalId,
        status: RentalStatus,
    ) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE rentals
            SET status = $2
            WHERE rental_id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(status.as_str())
        .execute(con)
        .await?;
        Ok(())
    }
}
