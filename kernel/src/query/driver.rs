use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Driver, DriverId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait DriverQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &DriverId,
    ) -> error_stack::Result<Option<Driver>, KernelError>;
    async fn get_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Driver>, KernelError>;
}

pub trait DependOnDriverQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type DriverQuery: DriverQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn driver_query(&self) -> &Self::DriverQuery;
}
