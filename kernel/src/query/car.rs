use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Car, CarId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError>;
    /// Cars with at least one unit in stock.
    async fn find_available(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Car>, KernelError>;
}

pub trait DependOnCarQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CarQuery: CarQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn car_query(&self) -> &Self::CarQuery;
}
