use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::gateway::{DependOnNotificationGateway, NotificationGateway};
use kernel::interface::query::{
    DependOnRentalQuery, DependOnUserQuery, RentalQuery, UserQuery,
};
use kernel::interface::update::{
    DependOnRentalModifier, DependOnUserModifier, RentalModifier, UserModifier,
};
use kernel::prelude::entity::{RentalId, UserId};
use kernel::KernelError;

use crate::transfer::MakePaymentDto;

#[async_trait::async_trait]
pub trait PaymentService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnUserQuery
    + DependOnUserModifier
    + DependOnRentalQuery
    + DependOnRentalModifier
    + DependOnNotificationGateway
{
    /// Moves the rental from `Book` to `Paid` and debits the full total from
    /// the customer's deposit in the same unit of work. The balance has no
    /// floor and may go negative.
    async fn make_payment(&self, dto: MakePaymentDto) -> error_stack::Result<(), KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let rental = self
            .rental_query()
            .find_by_id_and_user(&mut con, &RentalId::new(dto.rental_id), &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("rental history not found")
            })?;
        let next = rental.status().pay()?;
        self.rental_modifier()
            .update_status(&mut con, rental.id(), next)
            .await?;

        let user = self
            .user_query()
            .find_by_id(&mut con, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        let total = *rental.total_cost().as_ref();
        let user = user.reconstruct(|u| u.deposit = u.deposit.debit(total));
        self.user_modifier().update(&mut con, &user).await?;

        let owner = self
            .user_query()
            .find_owner(&mut con)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("owner not found")
            })?;
        con.commit().await?;

        let message = format!(
            "Dear {} - {},\n\nPayment for Rental ID - {} has been successfully completed!, please approve the process",
            owner.email().as_ref(),
            owner.role().as_str(),
            rental.id().as_ref(),
        );
        if let Err(report) = self
            .notification_gateway()
            .send(owner.phone_number(), &message)
            .await
        {
            tracing::warn!("payment notification to owner failed: {report:?}");
        }

        Ok(())
    }
}

impl<T> PaymentService for T where
    T: DependOnDatabaseConnection
        + DependOnUserQuery
        + DependOnUserModifier
        + DependOnRentalQuery
        + DependOnRentalModifier
        + DependOnNotificationGateway
{
}
