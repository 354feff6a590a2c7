use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::DriverQuery;
use kernel::prelude::entity::{
    Driver, DriverId, DriverName, DriverRating, ExperienceYears, LicenseNumber, PhoneNumber,
};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresDriverRepository;

#[async_trait::async_trait]
impl DriverQuery for PostgresDriverRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &DriverId,
    ) -> error_stack::Result<Option<Driver>, KernelError> {
        PgDriverInternal::find_by_id(con.conn(), id)
            .await
            .convert_error()
    }

    async fn get_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Driver>, KernelError> {
        PgDriverInternal::get_all(con.conn()).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct DriverRow {
    driver_id: Uuid,
    name: String,
    phone_number: String,
    license_number: String,
    experience_years: i32,
    rating: f64,
}

impl From<DriverRow> for Driver {
    fn from(value: DriverRow) -> Self {
        Driver::new(
            DriverId::new(value.driver_id),
            DriverName::new(value.name),
            PhoneNumber::new(value.phone_number),
            LicenseNumber::new(value.license_number),
            ExperienceYears::new(value.experience_years),
            DriverRating::new(value.rating),
        )
    }
}

pub(in crate::database) struct PgDriverInternal;

impl PgDriverInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &DriverId,
    ) -> Result<Option<Driver>, DriverError> {
        let row = sqlx::query_as::<_, DriverRow>(
            // language=postgresql
            r#"
            SELECT driver_id, name, phone_number, license_number, experience_years, rating
            FROM drivers
            WHERE driver_id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Driver::from))
    }

    async fn get_all(con: &mut PgConnection) -> Result<Vec<Driver>, DriverError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            // language=postgresql
            r#"
            SELECT driver_id, name, phone_number, license_number, experience_years, rating
            FROM drivers
            ORDER BY name
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Driver::from).collect())
    }
}
