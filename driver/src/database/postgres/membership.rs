use std::str::FromStr;

use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::MembershipQuery;
use kernel::interface::update::MembershipModifier;
use kernel::prelude::entity::{Membership, MembershipId, MembershipTier, UserId};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresMembershipRepository;

#[async_trait::async_trait]
impl MembershipQuery for PostgresMembershipRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Membership>, KernelError> {
        PgMembershipInternal::find_by_user_id(con.conn(), user_id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl MembershipModifier for PostgresMembershipRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        membership: &Membership,
    ) -> error_stack::Result<(), KernelError> {
        PgMembershipInternal::create(con.conn(), membership)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct MembershipRow {
    membership_id: Uuid,
    user_id: Uuid,
    discount_level: String,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DriverError;

    fn try_from(value: MembershipRow) -> Result<Self, Self::Error> {
        let tier = MembershipTier::from_str(&value.discount_level).map_err(|_| {
            DriverError::Conversion(anyhow::anyhow!(
                "unknown discount level: {}",
                value.discount_level
            ))
        })?;
        Ok(Membership::new(
            MembershipId::new(value.membership_id),
            UserId::new(value.user_id),
            tier,
        ))
    }
}

pub(in crate::database) struct PgMembershipInternal;

impl PgMembershipInternal {
    async fn find_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> Result<Option<Membership>, DriverError> {
        let row = sqlx::query_as::<_, MembershipRow>(
            // language=postgresql
            r#"
            SELECT membership_id, user_id, discount_level
            FROM memberships
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Membership::try_from).transpose()
    }

    async fn create(
        con: &mut PgConnection,
        membership: &Membership,
    ) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO memberships (membership_id, user_id, discount_level)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(membership.id().as_ref())
        .bind(membership.user_id().as_ref())
        .bind(membership.tier().as_str())
        .execute(con)
        .await?;
        Ok(())
    }
}
