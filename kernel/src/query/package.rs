use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{EventPackage, PackageId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PackageQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &PackageId,
    ) -> error_stack::Result<Option<EventPackage>, KernelError>;
    async fn get_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<EventPackage>, KernelError>;
}

pub trait DependOnPackageQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type PackageQuery: PackageQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn package_query(&self) -> &Self::PackageQuery;
}
