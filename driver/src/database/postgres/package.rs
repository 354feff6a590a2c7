use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::PackageQuery;
use kernel::prelude::entity::{
    EventPackage, PackageCost, PackageDescription, PackageId, PackageName,
};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresPackageRepository;

#[async_trait::async_trait]
impl PackageQuery for PostgresPackageRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &PackageId,
    ) -> error_stack::Result<Option<EventPackage>, KernelError> {
        PgPackageInternal::find_by_id(con.conn(), id)
            .await
            .convert_error()
    }

    async fn get_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<EventPackage>, KernelError> {
        PgPackageInternal::get_all(con.conn()).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    package_id: Uuid,
    package_name: String,
    description: String,
    cost: f64,
}

impl From<PackageRow> for EventPackage {
    fn from(value: PackageRow) -> Self {
        EventPackage::new(
            PackageId::new(value.package_id),
            PackageName::new(value.package_name),
            PackageDescription::new(value.description),
            PackageCost::new(value.cost),
        )
    }
}

pub(in crate::database) struct PgPackageInternal;

impl PgPackageInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &PackageId,
    ) -> Result<Option<EventPackage>, DriverError> {
        let row = sqlx::query_as::<_, PackageRow>(
            // language=postgresql
            r#"
            SELECT package_id, package_name, description, cost
            FROM event_packages
            WHERE package_id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(EventPackage::from))
    }

    async fn get_all(con: &mut PgConnection) -> Result<Vec<EventPackage>, DriverError> {
        let rows = sqlx::query_as::<_, PackageRow>(
            // language=postgresql
            r#"
            SELECT package_id, package_name, description, cost
            FROM event_packages
            ORDER BY package_name
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(EventPackage::from).collect())
    }
}
