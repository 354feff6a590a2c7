use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::gateway::{
    DependOnInvoiceGateway, DependOnNotificationGateway, InvoiceCustomer, InvoiceDraft,
    InvoiceFee, InvoiceGateway, InvoiceItem, NotificationGateway,
};
use kernel::interface::query::{
    CarQuery, DependOnCarQuery, DependOnDriverQuery, DependOnMembershipQuery,
    DependOnPackageQuery, DependOnUserQuery, DriverQuery, MembershipQuery, PackageQuery,
    UserQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    Car, CarId, Driver, DriverId, DropoffLocation, EventPackage, MembershipTier, PackageId,
    PickupLocation, Rental, RentalId, RentalPeriod, RentalQuote, RentalStatus, User, UserId,
    AIRPORT_TRANSFER_FEE, CONCIERGE_FEE, DRIVER_DAILY_FEE, PICKUP_DROPOFF_FEE,
};
use kernel::KernelError;

use crate::service::format_datetime;
use crate::transfer::{CreateBookingDto, RentalDto};

const INVOICE_DURATION_SECS: u32 = 86_400;

#[async_trait::async_trait]
pub trait BookingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnUserQuery
    + DependOnCarQuery
    + DependOnDriverQuery
    + DependOnPackageQuery
    + DependOnMembershipQuery
    + DependOnRentalModifier
    + DependOnNotificationGateway
    + DependOnInvoiceGateway
{
    /// Creates a rental in `Book` status, then sends the confirmation and the
    /// invoice link. The rental is committed before any outbound call, so a
    /// gateway failure surfaces to the caller but never loses the booking.
    async fn book(&self, dto: CreateBookingDto) -> error_stack::Result<RentalDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user = self
            .user_query()
            .find_by_id(&mut con, &UserId::new(dto.user_id))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        let car = self
            .car_query()
            .find_by_id(&mut con, &CarId::new(dto.car_id))
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound).attach_printable("car not found"))?;
        if !car.stock().is_available() {
            return Err(Report::new(KernelError::OutOfStock)
                .attach_printable(format!("current stock: {}", car.stock().as_ref())));
        }

        let driver = match dto.driver_id {
            Some(id) => Some(
                self.driver_query()
                    .find_by_id(&mut con, &DriverId::new(id))
                    .await?
                    .ok_or_else(|| {
                        Report::new(KernelError::NotFound).attach_printable("driver not found")
                    })?,
            ),
            None => None,
        };
        let package = match dto.package_id {
            Some(id) => Some(
                self.package_query()
                    .find_by_id(&mut con, &PackageId::new(id))
                    .await?
                    .ok_or_else(|| {
                        Report::new(KernelError::NotFound)
                            .attach_printable("event package not found")
                    })?,
            ),
            None => None,
        };

        let period = RentalPeriod::new(dto.rental_date, dto.return_date)?;
        let tier = self
            .membership_query()
            .find_by_user_id(&mut con, user.id())
            .await?
            .map(|membership| *membership.tier());

        let pickup_dropoff = dto.pickup_location.is_some() && dto.dropoff_location.is_some();
        let quote = RentalQuote::new(
            period.clone(),
            car.daily_rate().clone(),
            driver.is_some(),
            package.as_ref().map(|p| p.cost().clone()),
            pickup_dropoff,
            dto.airport_transfer,
            dto.concierge_services,
            tier,
        );

        let rental = Rental::new(
            RentalId::new(Uuid::new_v4()),
            user.id().clone(),
            car.id().clone(),
            driver.as_ref().map(|d| d.id().clone()),
            package.as_ref().map(|p| p.id().clone()),
            period,
            dto.pickup_location.map(PickupLocation::new),
            dto.dropoff_location.map(DropoffLocation::new),
            dto.airport_transfer,
            dto.concierge_services,
            quote.total(),
            RentalStatus::Book,
        );
        self.rental_modifier().create(&mut con, &rental).await?;
        con.commit().await?;

        let confirmation =
            booking_confirmation(&user, &rental, &car, driver.as_ref(), package.as_ref());
        self.notification_gateway()
            .send(user.phone_number(), &confirmation)
            .await?;

        let draft = invoice_draft(&user, &rental, &car, &quote, package.as_ref(), tier);
        let invoice_url = self.invoice_gateway().create(&draft).await?;
        self.notification_gateway()
            .send(user.phone_number(), &invoice_message(&user, invoice_url.as_ref()))
            .await?;

        Ok(RentalDto::from(rental))
    }
}

impl<T> BookingService for T where
    T: DependOnDatabaseConnection
        + DependOnUserQuery
        + DependOnCarQuery
        + DependOnDriverQuery
        + DependOnPackageQuery
        + DependOnMembershipQuery
        + DependOnRentalModifier
        + DependOnNotificationGateway
        + DependOnInvoiceGateway
{
}

fn booking_confirmation(
    user: &User,
    rental: &Rental,
    car: &Car,
    driver: Option<&Driver>,
    package: Option<&EventPackage>,
) -> String {
    let profile = car.profile();
    let driver_name = driver.map(|d| d.name().as_ref().clone()).unwrap_or_default();
    let driver_contact = driver
        .map(|d| d.phone_number().as_ref().clone())
        .unwrap_or_default();
    let package_name = package
        .map(|p| p.name().as_ref().clone())
        .unwrap_or_default();
    let package_description = package
        .map(|p| p.description().as_ref().clone())
        .unwrap_or_default();
    let pickup = rental
        .pickup_location()
        .as_ref()
        .map(|l| l.as_ref().clone())
        .unwrap_or_default();
    let dropoff = rental
        .dropoff_location()
        .as_ref()
        .map(|l| l.as_ref().clone())
        .unwrap_or_default();

    format!(
        "Subject: Booking Confirmation - [Rental ID: {rental_id}]\n\n\
         Dear {email} - {role},\n\n\
         Congratulations! Your booking has been successfully confirmed. Below are the details of your booking:\n\n\
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
         Booking Details:\n\
         \x20 - Rental Date: {rental_date}\n\
         \x20 - Return Date: {return_date}\n\
         \x20 - Pickup Location: {pickup}\n\
         \x20 - Dropoff Location: {dropoff}\n\
         \x20 - Total Cost: {total:.2}\n\
         \x20 - Airport Transfer: {airport}\n\
         \x20 - Concierge Services: {concierge}\n\n\
         Driver Details:\n\
         \x20 - Driver Name: {driver_name}\n\
         \x20 - Driver Contact: {driver_contact}\n\n\
         Package Details:\n\
         \x20 - Package Name: {package_name}\n\
         \x20 - Package Description: {package_description}\n\n\
         Thank you for choosing our service! We look forward to serving you.\n\n\
         Best regards,\nJakarta Luxury Rent Car",
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
        rental_date = format_datetime(rental.period().starts_at()),
        return_date = format_datetime(rental.period().ends_at()),
        total = rental.total_cost().as_ref(),
        airport = rental.airport_transfer(),
        concierge = rental.concierge_services(),
    )
}

fn invoice_message(user: &User, invoice_url: &str) -> String {
    format!(
        "Dear {email} - {role},\n\n\
         Thank you for using Jakarta Luxury Car Rental. Please find your invoice at the following link:\n\
         {invoice_url}\n\n\
         Kindly complete the payment within the next 24 hours. If you have any questions, feel free to contact us.\n\n\
         Best regards,\nJakarta Luxury Car Rental",
        email = user.email().as_ref(),
        role = user.role().as_str(),
    )
}

fn invoice_draft(
    user: &User,
    rental: &Rental,
    car: &Car,
    quote: &RentalQuote,
    package: Option<&EventPackage>,
    tier: Option<MembershipTier>,
) -> InvoiceDraft {
    let days = quote.days();
    let total = *rental.total_cost().as_ref();
    let driver_fee = if rental.driver_id().is_some() {
        DRIVER_DAILY_FEE
    } else {
        0.0
    };
    let package_cost = package.map(|p| *p.cost().as_ref()).unwrap_or(0.0);
    let pickup_fee = if rental.pickup_location().is_some() && rental.dropoff_location().is_some() {
        PICKUP_DROPOFF_FEE
    } else {
        0.0
    };
    let airport_fee = if *rental.airport_transfer() {
        AIRPORT_TRANSFER_FEE
    } else {
        0.0
    };
    let concierge_fee = if *rental.concierge_services() {
        CONCIERGE_FEE
    } else {
        0.0
    };
    let tier_name = tier.map(|tier| tier.as_str()).unwrap_or("");
    let discount = tier
        .map(|tier| invoice_discount(tier, total))
        .unwrap_or(0.0);

    InvoiceDraft::new(
        format!("Invoice Jakarta Luxury Car For : {}", car.name().as_ref()),
        total,
        format!(
            "Invoice Jakarta Luxury Car To : {} - {}",
            user.email().as_ref(),
            user.phone_number().as_ref()
        ),
        INVOICE_DURATION_SECS,
        "IDR",
        InvoiceCustomer::new(user.email().clone(), user.phone_number().clone()),
        vec![
            InvoiceItem::new(
                car.name().as_ref().clone(),
                days,
                *car.daily_rate().as_ref(),
                Some(car.profile().category().clone()),
            ),
            InvoiceItem::new("Driver", days, driver_fee, None),
            InvoiceItem::new("Event Package", 1.0, package_cost, None),
            InvoiceItem::new("Pickup and Dropoff", 1.0, pickup_fee, None),
            InvoiceItem::new("Transfer Airport", 1.0, airport_fee, None),
            InvoiceItem::new("Concierge Service", 1.0, concierge_fee, None),
        ],
        vec![InvoiceFee::new(
            format!("Discount Level - {tier_name}"),
            discount,
        )],
    )
}

/// Discount line shown on the invoice, restated from the already-discounted
/// total. Only the Silver divisor recovers the pre-discount price; Gold and
/// Platinum divide by the discount fraction, so their stated discount equals
/// the charged total.
fn invoice_discount(tier: MembershipTier, total: f64) -> f64 {
    let original = match tier {
        MembershipTier::Silver => total / 0.90,
        MembershipTier::Gold => total / 0.20,
        MembershipTier::Platinum => total / 0.30,
    };
    original * tier.discount_fraction()
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::MembershipTier;

    use super::invoice_discount;

    #[test]
    fn silver_discount_restates_the_pre_discount_price() {
        // 1000 before discount, 900 charged, 100 shown.
        let shown = invoice_discount(MembershipTier::Silver, 900.0);
        assert!((shown - 100.0).abs() < 1e-9);
    }

    #[test]
    fn gold_and_platinum_show_the_charged_total() {
        assert!((invoice_discount(MembershipTier::Gold, 800.0) - 800.0).abs() < 1e-9);
        assert!((invoice_discount(MembershipTier::Platinum, 700.0) - 700.0).abs() < 1e-9);
    }
}
