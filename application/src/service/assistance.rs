use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::gateway::{DependOnNotificationGateway, NotificationGateway};
use kernel::interface::query::{
    CarQuery, DependOnCarQuery, DependOnRentalQuery, DependOnUserQuery, RentalQuery, UserQuery,
};
use kernel::interface::update::{AssistanceModifier, DependOnAssistanceModifier};
use kernel::prelude::entity::{
    Assistance, AssistanceDescription, AssistanceId, AssistanceLocation, RentalId, RequestedAt,
    UserId,
};
use kernel::KernelError;

use crate::service::format_datetime_seconds;
use crate::transfer::{AssistanceDto, CallAssistanceDto};

#[async_trait::async_trait]
pub trait AssistanceService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnUserQuery
    + DependOnRentalQuery
    + DependOnCarQuery
    + DependOnAssistanceModifier
    + DependOnNotificationGateway
{
    /// Records a roadside assistance request against the caller's own rental
    /// and relays the details, with a maps link, over WhatsApp.
    async fn call_assistance(
        &self,
        dto: CallAssistanceDto,
    ) -> error_stack::Result<AssistanceDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let user = self
            .user_query()
            .find_by_id(&mut con, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        let rental = self
            .rental_query()
            .find_by_id_and_user(&mut con, &RentalId::new(dto.rental_id), &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable("rental history not found or does not belong to the user")
            })?;
        let car = self
            .car_query()
            .find_by_id(&mut con, rental.car_id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable("car not found for rental history")
            })?;

        let assistance = Assistance::new(
            AssistanceId::new(Uuid::new_v4()),
            rental.id().clone(),
            user.id().clone(),
            RequestedAt::now(),
            AssistanceDescription::new(dto.description),
            AssistanceLocation::new(dto.location),
        );
        self.assistance_modifier()
            .create(&mut con, &assistance)
            .await?;
        con.commit().await?;

        let location_link = format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(assistance.location().as_ref()),
        );
        let profile = car.profile();
        let message = format!(
            "Subject: Call Assistance Request - [Rental ID: {rental_id}]\n\n\
             Dear {email} - {role},\n\n\
             You received call assistance. Below are the details of user request:\n\n\
             User Details:\n\
             \x20 - Email: {email}\n\
             \x20 - Phone Number: {phone}\n\n\
             Rental Details:\n\
             \x20 - Rental ID: {rental_id}\n\
             \x20 - Car Name: {car_name}\n\
             \x20 - Car Category: {category}\n\
             \x20 - Car Brand: {make}\n\
             \x20 - Car Model: {model}\n\
             \x20 - Car Transmission: {transmission}\n\
             \x20 - Car Year: {year}\n\
             \x20 - Car Fuel Type: {fuel_type}\n\
             \x20 - Car Class: {class}\n\n\
             Assistance Request Details:\n\
             \x20 - Date: {date}\n\
             \x20 - Location: {location}\n\
             \x20 - Link to Location: {link}\n\
             \x20 - Description: {description}",
            rental_id = rental.id().as_ref(),
            email = user.email().as_ref(),
            role = user.role().as_str(),
            phone = user.phone_number().as_ref(),
            car_name = car.name().as_ref(),
            category = profile.category(),
            make = profile.make(),
            model = profile.model(),
            transmission = profile.transmission(),
            year = profile.year(),
            fuel_type = profile.fuel_type(),
            class = profile.class(),
            date = format_datetime_seconds(assistance.requested_at().as_ref()),
            location = assistance.location().as_ref(),
            link = location_link,
            description = assistance.description().as_ref(),
        );
        self.notification_gateway()
            .send(user.phone_number(), &message)
            .await?;

        Ok(AssistanceDto::from_assistance(assistance, location_link))
    }
}

impl<T> AssistanceService for T where
    T: DependOnDatabaseConnection
        + DependOnUserQuery
        + DependOnRentalQuery
        + DependOnCarQuery
        + DependOnAssistanceModifier
        + DependOnNotificationGateway
{
}
