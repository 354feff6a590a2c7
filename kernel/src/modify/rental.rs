use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Rental, RentalId, RentalStatus};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;
    async fn update_status(
        &self,
        con: &mut Self::Transaction,
        id: &RentalId,
        status: RentalStatus,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentalModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentalModifier: RentalModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
