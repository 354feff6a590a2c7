use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CarId, CarStock};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Takes one unit of stock, guarded at the store so two concurrent
    /// approvals cannot both consume the last car. `None` when the stock is
    /// already exhausted.
    async fn decrement_stock(
        &self,
        con: &mut Self::Transaction,
        id: &CarId,
    ) -> error_stack::Result<Option<CarStock>, KernelError>;
}

pub trait DependOnCarModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CarModifier: CarModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn car_modifier(&self) -> &Self::CarModifier;
}
