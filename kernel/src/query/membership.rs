use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Membership, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait MembershipQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// `None` means the user has no membership, which costs them nothing at
    /// booking time but is reported as absent where membership is displayed.
    async fn find_by_user_id(
        &self,
        con: &mut Self::Transaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Membership>, KernelError>;
}

pub trait DependOnMembershipQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type MembershipQuery: MembershipQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn membership_query(&self) -> &Self::MembershipQuery;
}
