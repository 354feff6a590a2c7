use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{User, UserEmail, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError>;
    async fn find_by_email(
        &self,
        con: &mut Self::Transaction,
        email: &UserEmail,
    ) -> error_stack::Result<Option<User>, KernelError>;
    /// First user carrying the owner role; the recipient of payment and
    /// approval notifications.
    async fn find_owner(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Option<User>, KernelError>;
}

pub trait DependOnUserQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type UserQuery: UserQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn user_query(&self) -> &Self::UserQuery;
}
