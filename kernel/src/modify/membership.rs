use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Membership;
use crate::KernelError;

#[async_trait::async_trait]
pub trait MembershipModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        membership: &Membership,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnMembershipModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type MembershipModifier: MembershipModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn membership_modifier(&self) -> &Self::MembershipModifier;
}
