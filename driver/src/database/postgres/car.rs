use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::CarQuery;
use kernel::interface::update::CarModifier;
use kernel::prelude::entity::{Car, CarId, CarName, CarProfile, CarStock, DailyRate};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresCarRepository;

#[async_trait::async_trait]
impl CarQuery for PostgresCarRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        PgCarInternal::find_by_id(con.conn(), id).await.convert_error()
    }

    async fn find_available(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        PgCarInternal::find_available(con.conn()).await.convert_error()
    }
}

#[async_trait::async_trait]
impl CarModifier for PostgresCarRepository {
    type Transaction = PostgresTransaction;

    async fn decrement_stock(
        &self,
        con: &mut PostgresTransaction,
        id: &CarId,
    ) -> error_stack::Result<Option<CarStock>, KernelError> {
        PgCarInternal::decrement_stock(con.conn(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct CarRow {
    car_id: Uuid,
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

impl From<CarRow> for Car {
    fn from(value: CarRow) -> Self {
        Car::new(
            CarId::new(value.car_id),
            CarName::new(value.name),
            CarStock::new(value.stock_availability),
            DailyRate::new(value.rental_costs),
            CarProfile::new(
                value.category,
                value.make,
                value.model,
                value.transmission,
                value.year,
                value.fuel_type,
                value.class,
            ),
        )
    }
}

pub(in crate::database) struct PgCarInternal;

impl PgCarInternal {
    async fn find_by_id(con: &mut PgConnection, id: &CarId) -> Result<Option<Car>, DriverError> {
        let row = sqlx::query_as::<_, CarRow>(
            // language=postgresql
            r#"
            SELECT car_id, name, stock_availability, rental_costs,
                   category, make, model, transmission, year, fuel_type, class
            FROM cars
            WHERE car_id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Car::from))
    }

    async fn find_available(con: &mut PgConnection) -> Result<Vec<Car>, DriverError> {
        let rows = sqlx::query_as::<_, CarRow>(
            // language=postgresql
            r#"
            SELECT car_id, name, stock_availability, rental_costs,
                   category, make, model, transmission, year, fuel_type, class
            FROM cars
            WHERE stock_availability > 0
            ORDER BY name
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Car::from).collect())
    }

    // The predicate on stock_availability makes the decrement atomic: two
    // racing approvals of the last unit cannot both match the row.
    async fn decrement_stock(
        con: &mut PgConnection,
        id: &CarId,
    ) -> Result<Option<CarStock>, DriverError> {
        let stock = sqlx::query_scalar::<_, i32>(
            // language=postgresql
            r#"
            UPDATE cars
            SET stock_availability = stock_availability - 1
            WHERE car_id = $1 AND stock_availability > 0
            RETURNING stock_availability
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(stock.map(CarStock::new))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::CarQuery;
    use kernel::interface::update::CarModifier;
    use kernel::prelude::entity::{CarId, CarStock};
    use kernel::KernelError;

    use crate::database::postgres::car::PostgresCarRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = CarId::new(uuid::Uuid::new_v4());

        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO cars (car_id, name, stock_availability, rental_costs,
                              category, make, model, transmission, year, fuel_type, class)
            VALUES ($1, 'Avanza', 1, 500, 'MPV', 'Toyota', 'Avanza', 'manual', 2022, 'petrol', 'standard')
            "#,
        )
        .bind(id.as_ref())
        .execute(con.conn())
        .await
        .unwrap();

        let decremented = PostgresCarRepository.decrement_stock(&mut con, &id).await?;
        assert_eq!(decremented, Some(CarStock::new(0)));

        // Stock is exhausted, a second decrement must not match.
        let decremented = PostgresCarRepository.decrement_stock(&mut con, &id).await?;
        assert_eq!(decremented, None);

        let found = PostgresCarRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found.map(|car| car.stock().clone()), Some(CarStock::new(0)));

        con.roll_back().await?;
        Ok(())
    }
}
