use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::UserId;
use kernel::KernelError;

use crate::transfer::{DepositDto, TopUpDto};

#[async_trait::async_trait]
pub trait DepositService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnUserQuery + DependOnUserModifier
{
    async fn get_deposit(&self, user_id: Uuid) -> error_stack::Result<DepositDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user = self
            .user_query()
            .find_by_id(&mut con, &UserId::new(user_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;

        Ok(DepositDto {
            email: user.email().as_ref().clone(),
            deposit_amount: *user.deposit().as_ref(),
        })
    }

    async fn top_up(&self, dto: TopUpDto) -> error_stack::Result<DepositDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user = self
            .user_query()
            .find_by_id(&mut con, &UserId::new(dto.user_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        let user = user.reconstruct(|u| u.deposit = u.deposit.credit(dto.amount));
        self.user_modifier().update(&mut con, &user).await?;
        con.commit().await?;

        Ok(DepositDto {
            email: user.email().as_ref().clone(),
            deposit_amount: *user.deposit().as_ref(),
        })
    }
}

impl<T> DepositService for T where
    T: DependOnDatabaseConnection + DependOnUserQuery + DependOnUserModifier
{
}
