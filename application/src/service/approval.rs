use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::gateway::{DependOnNotificationGateway, NotificationGateway};
use kernel::interface::query::{
    CarQuery, DependOnCarQuery, DependOnRentalQuery, DependOnUserQuery, RentalQuery, UserQuery,
};
use kernel::interface::update::{
    CarModifier, DependOnCarModifier, DependOnRentalModifier, RentalModifier,
};
use kernel::prelude::entity::{RentalId, UserId, UserRole};
use kernel::KernelError;

use crate::transfer::{ApprovalAction, ApproveBookingDto};

#[async_trait::async_trait]
pub trait ApprovalService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnUserQuery
    + DependOnCarQuery
    + DependOnCarModifier
    + DependOnRentalQuery
    + DependOnRentalModifier
    + DependOnNotificationGateway
{
    /// Owner decision on a paid booking. Approval takes one unit of stock and
    /// moves the rental to `Rent`; rejection moves it to `Cancel`. The status
    /// change and the stock decrement commit together.
    async fn process_booking(
        &self,
        dto: ApproveBookingDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut con = self.database_connection().transact().await?;

        let acting = self
            .user_query()
            .find_by_id(&mut con, &UserId::new(dto.acting_user_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        if acting.role() != &UserRole::Owner {
            return Err(Report::new(KernelError::PermissionDenied)
                .attach_printable("only owners can approve or reject bookings"));
        }

        let rental = self
            .rental_query()
            .find_by_id(&mut con, &RentalId::new(dto.rental_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("rental history not found")
            })?;
        let car = self
            .car_query()
            .find_by_id(&mut con, rental.car_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound).attach_printable("car not found"))?;
        let customer = self
            .user_query()
            .find_by_id(&mut con, rental.user_id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("customer not found")
            })?;

        match dto.action {
            ApprovalAction::Approve => {
                let next = rental.status().approve()?;
                self.car_modifier()
                    .decrement_stock(&mut con, rental.car_id())
                    .await?
                    .ok_or_else(|| {
                        Report::new(KernelError::OutOfStock)
                            .attach_printable("car is out of stock")
                    })?;
                self.rental_modifier()
                    .update_status(&mut con, rental.id(), next)
                    .await?;
                con.commit().await?;

                let to_customer = format!(
                    "Dear {} - {},\n\n\
                     Your booking for the car '{}' is confirmed and ready for use. Enjoy your ride!\n\n\
                     We hope you have a great experience! Please don't forget to leave us a 5-star review!\n\n\
                     Best regards,\nJakarta Luxury Rent Car",
                    customer.email().as_ref(),
                    customer.role().as_str(),
                    car.name().as_ref(),
                );
                if let Err(report) = self
                    .notification_gateway()
                    .send(customer.phone_number(), &to_customer)
                    .await
                {
                    tracing::warn!("approval notification to customer failed: {report:?}");
                }

                let to_owner = format!(
                    "Dear {} - {},\n\n\
                     The car '{}' has been successfully booked by '{}' and is ready for use. Please ensure it is in perfect condition for the customer\n",
                    acting.email().as_ref(),
                    acting.role().as_str(),
                    car.name().as_ref(),
                    customer.email().as_ref(),
                );
                if let Err(report) = self
                    .notification_gateway()
                    .send(acting.phone_number(), &to_owner)
                    .await
                {
                    tracing::warn!("approval notification to owner failed: {report:?}");
                }
            }
            ApprovalAction::Reject => {
                let next = rental.status().reject()?;
                self.rental_modifier()
                    .update_status(&mut con, rental.id(), next)
                    .await?;
                con.commit().await?;
            }
        }

        Ok(())
    }
}

impl<T> ApprovalService for T where
    T: DependOnDatabaseConnection
        + DependOnUserQuery
        + DependOnCarQuery
        + DependOnCarModifier
        + DependOnRentalQuery
        + DependOnRentalModifier
        + DependOnNotificationGateway
{
}
