use sqlx::PgConnection;

use kernel::interface::update::AssistanceModifier;
use kernel::prelude::entity::Assistance;
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresAssistanceRepository;

#[async_trait::async_trait]
impl AssistanceModifier for PostgresAssistanceRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        assistance: &Assistance,
    ) -> error_stack::Result<(), KernelError> {
        PgAssistanceInternal::create(con.conn(), assistance)
            .await
            .convert_error()
    }
}

pub(in crate::database) struct PgAssistanceInternal;

impl PgAssistanceInternal {
    async fn create(
        con: &mut PgConnection,
        assistance: &Assistance,
    ) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO call_assistances (assistance_id, rental_id, user_id,
                                          callassistance_date, description, location)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(assistance.id().as_ref())
        .bind(assistance.rental_id().as_ref())
        .bind(assistance.user_id().as_ref())
        .bind(assistance.requested_at().as_ref())
        .bind(assistance.description().as_ref())
        .bind(assistance.location().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
