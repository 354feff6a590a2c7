use std::str::FromStr;

use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{
    Address, DepositBalance, PasswordHash, PhoneNumber, User, UserEmail, UserId, UserRole,
};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery for PostgresUserRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_id(con.conn(), id).await.convert_error()
    }

    async fn find_by_email(
        &self,
        con: &mut PostgresTransaction,
        email: &UserEmail,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_email(con.conn(), email)
            .await
            .convert_error()
    }

    async fn find_owner(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_owner(con.conn()).await.convert_error()
    }
}

#[async_trait::async_trait]
impl UserModifier for PostgresUserRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::create(con.conn(), user).await.convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::update(con.conn(), user).await.convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password: String,
    phone_number: String,
    address: String,
    deposit_amount: f64,
    role: String,
}

impl TryFrom<UserRow> for User {
    type Error = DriverError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let role = UserRole::from_str(&value.role)
            .map_err(|_| DriverError::Conversion(anyhow::anyhow!("unknown role: {}", value.role)))?;
        Ok(User::new(
            UserId::new(value.user_id),
            UserEmail::new(value.email),
            PasswordHash::new(value.password),
            PhoneNumber::new(value.phone_number),
            Address::new(value.address),
            DepositBalance::new(value.deposit_amount),
            role,
        ))
    }
}

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn find_by_id(con: &mut PgConnection, id: &UserId) -> Result<Option<User>, DriverError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT user_id, email, password, phone_number, address, deposit_amount, role
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_email(
        con: &mut PgConnection,
        email: &UserEmail,
    ) -> Result<Option<User>, DriverError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT user_id, email, password, phone_number, address, deposit_amount, role
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(User::try_from).transpose()
    }

    async fn find_owner(con: &mut PgConnection) -> Result<Option<User>, DriverError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT user_id, email, password, phone_number, address, deposit_amount, role
            FROM users
            WHERE role = 'owner'
            ORDER BY user_id
            LIMIT 1
            "#,
        )
        .fetch_optional(con)
        .await?;
        row.map(User::try_from).transpose()
    }

    async fn create(con: &mut PgConnection, user: &User) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO users (user_id, email, password, phone_number, address, deposit_amount, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.email().as_ref())
        .bind(user.password().as_ref())
        .bind(user.phone_number().as_ref())
        .bind(user.address().as_ref())
        .bind(user.deposit().as_ref())
        .bind(user.role().as_str())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, user: &User) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE users
            SET email = $2, password = $3, phone_number = $4, address = $5, deposit_amount = $6, role = $7
            WHERE user_id = $1
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.email().as_ref())
        .bind(user.password().as_ref())
        .bind(user.phone_number().as_ref())
        .bind(user.address().as_ref())
        .bind(user.deposit().as_ref())
        .bind(user.role().as_str())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{
        Address, DepositBalance, PasswordHash, PhoneNumber, User, UserEmail, UserId, UserRole,
    };
    use kernel::KernelError;

    use crate::database::postgres::user::PostgresUserRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = UserId::new(uuid::Uuid::new_v4());

        let user = User::new(
            id.clone(),
            UserEmail::new(format!("{}@example.com", uuid::Uuid::new_v4())),
            PasswordHash::new("$argon2id$test"),
            PhoneNumber::new("6281200001111"),
            Address::new("Jl. Sudirman No. 1"),
            DepositBalance::default(),
            UserRole::User,
        );
        PostgresUserRepository.create(&mut con, &user).await?;

        let found = PostgresUserRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(user.clone()));

        let found = PostgresUserRepository
            .find_by_email(&mut con, user.email())
            .await?;
        assert_eq!(found, Some(user));

        con.roll_back().await?;
        Ok(())
    }
}
