use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Assistance;
use crate::KernelError;

#[async_trait::async_trait]
pub trait AssistanceModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        assistance: &Assistance,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAssistanceModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AssistanceModifier: AssistanceModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn assistance_modifier(&self) -> &Self::AssistanceModifier;
}
