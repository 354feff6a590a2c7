use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use time::macros::datetime;
use uuid::Uuid;

use application::service::{
    AccountService, ApprovalService, AssistanceService, BookingService, DepositService,
    MembershipService, PaymentService,
};
use application::transfer::{
    ApprovalAction, ApproveBookingDto, CallAssistanceDto, CreateBookingDto, LoginUserDto,
    MakePaymentDto, RegisterUserDto, TopUpDto,
};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::gateway::{
    AccessToken, DependOnInvoiceGateway, DependOnNotificationGateway, DependOnPasswordEncoder,
    DependOnTokenGateway, Identity, InvoiceDraft, InvoiceGateway, InvoiceUrl,
    NotificationGateway, PasswordEncoder, TokenGateway,
};
use kernel::interface::query::{
    CarQuery, DependOnCarQuery, DependOnDriverQuery, DependOnMembershipQuery,
    DependOnPackageQuery, DependOnRentalQuery, DependOnUserQuery, DriverQuery, MembershipQuery,
    PackageQuery, RentalQuery, UserQuery,
};
use kernel::interface::update::{
    AssistanceModifier, CarModifier, DependOnAssistanceModifier, DependOnCarModifier,
    DependOnMembershipModifier, DependOnRentalModifier, DependOnUserModifier, MembershipModifier,
    RentalModifier, UserModifier,
};
use kernel::prelude::entity::{
    Address, Assistance, Car, CarId, CarName, CarProfile, CarStock, DailyRate, DepositBalance,
    Driver, EventPackage, Membership, MembershipId, MembershipTier, PasswordHash, PhoneNumber,
    Rental, RentalId, RentalStatus, User, UserEmail, UserId, UserRole,
};
use kernel::KernelError;

#[derive(Default)]
struct Store {
    users: HashMap<Uuid, User>,
    cars: HashMap<Uuid, Car>,
    drivers: HashMap<Uuid, Driver>,
    packages: HashMap<Uuid, EventPackage>,
    memberships: HashMap<Uuid, Membership>,
    rentals: HashMap<Uuid, Rental>,
    assistances: Vec<Assistance>,
}

#[derive(Clone, Default)]
struct InMemory(Arc<Mutex<Store>>);

struct NoopTransaction;

#[async_trait::async_trait]
impl Transaction for NoopTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemory {
    type Transaction = NoopTransaction;
    async fn transact(&self) -> error_stack::Result<NoopTransaction, KernelError> {
        Ok(NoopTransaction)
    }
}

#[async_trait::async_trait]
impl UserQuery for InMemory {
    type Transaction = NoopTransaction;
    async fn find_by_id(
        &self,
        _: &mut NoopTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(self.0.lock().unwrap().users.get(id.as_ref()).cloned())
    }
    async fn find_by_email(
        &self,
        _: &mut NoopTransaction,
        email: &UserEmail,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .users
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }
    async fn find_owner(
        &self,
        _: &mut NoopTransaction,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .users
            .values()
            .find(|user| user.role() == &UserRole::Owner)
            .cloned())
    }
}

#[async_trait::async_trait]
impl UserModifier for InMemory {
    type Transaction = NoopTransaction;
    async fn create(
        &self,
        _: &mut NoopTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        self.0
            .lock()
            .unwrap()
            .users
            .insert(*user.id().as_ref(), user.clone());
        Ok(())
    }
    async fn update(
        &self,
        _: &mut NoopTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        self.0
            .lock()
            .unwrap()
            .users
            .insert(*user.id().as_ref(), user.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl CarQuery for InMemory {
    type Transaction = NoopTransaction;
    async fn find_by_id(
        &self,
        _: &mut NoopTransaction,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        Ok(self.0.lock().unwrap().cars.get(id.as_ref()).cloned())
    }
    async fn find_available(
        &self,
        _: &mut NoopTransaction,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .cars
            .values()
            .filter(|car| car.stock().is_available())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl CarModifier for InMemory {
    type Transaction = NoopTransaction;
    async fn decrement_stock(
        &self,
        _: &mut NoopTransaction,
        id: &CarId,
    ) -> error_stack::Result<Option<CarStock>, KernelError> {
        let mut store = self.0.lock().unwrap();
        let Some(car) = store.cars.get(id.as_ref()).cloned() else {
            return Ok(None);
        };
        let Some(stock) = car.stock().decrement() else {
            return Ok(None);
        };
        let d = car.into_destruct();
        store.cars.insert(
            *id.as_ref(),
            Car::new(d.id, d.name, stock.clone(), d.daily_rate, d.profile),
        );
        Ok(Some(stock))
    }
}

#[async_trait::async_trait]
impl DriverQuery for InMemory {
    type Transaction = NoopTransaction;
    async fn find_by_id(
        &self,
        _: &mut NoopTransaction,
        id: &kernel::prelude::entity::DriverId,
    ) -> error_stack::Result<Option<Driver>, KernelError> {
        Ok(self.0.lock().unwrap().drivers.get(id.as_ref()).cloned())
    }
    async fn get_all(
        &self,
        _: &mut NoopTransaction,
    ) -> error_stack::Result<Vec<Driver>, KernelError> {
        Ok(self.0.lock().unwrap().drivers.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl PackageQuery for InMemory {
    type Transaction = NoopTransaction;
    async fn find_by_id(
        &self,
        _: &mut NoopTransaction,
        id: &kernel::prelude::entity::PackageId,
    ) -> error_stack::Result<Option<EventPackage>, KernelError> {
        Ok(self.0.lock().unwrap().packages.get(id.as_ref()).cloned())
    }
    async fn get_all(
        &self,
        _: &mut NoopTransaction,
    ) -> error_stack::Result<Vec<EventPackage>, KernelError> {
        Ok(self.0.lock().unwrap().packages.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl MembershipQuery for InMemory {
    type Transaction = NoopTransaction;
    async fn find_by_user_id(
        &self,
        _: &mut NoopTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Membership>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .memberships
            .get(user_id.as_ref())
            .cloned())
    }
}

#[async_trait::async_trait]
impl MembershipModifier for InMemory {
    type Transaction = NoopTransaction;
    async fn create(
        &self,
        _: &mut NoopTransaction,
        membership: &Membership,
    ) -> error_stack::Result<(), KernelError> {
        self.0
            .lock()
            .unwrap()
            .memberships
            .insert(*membership.user_id().as_ref(), membership.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl RentalQuery for InMemory {
    type Transaction = NoopTransaction;
    async fn find_by_id(
        &self,
        _: &mut NoopTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        Ok(self.0.lock().unwrap().rentals.get(id.as_ref()).cloned())
    }
    async fn find_by_id_and_user(
        &self,
        _: &mut NoopTransaction,
        id: &RentalId,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .rentals
            .get(id.as_ref())
            .filter(|rental| rental.user_id() == user_id)
            .cloned())
    }
    async fn get_all(
        &self,
        _: &mut NoopTransaction,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        Ok(self.0.lock().unwrap().rentals.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl RentalModifier for InMemory {
    type Transaction = NoopTransaction;
    async fn create(
        &self,
        _: &mut NoopTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        self.0
            .lock()
            .unwrap()
            .rentals
            .insert(*rental.id().as_ref(), rental.clone());
        Ok(())
    }
    async fn update_status(
        &self,
        _: &mut NoopTransaction,
        id: &RentalId,
        status: RentalStatus,
    ) -> error_stack::Result<(), KernelError> {
        let mut store = self.0.lock().unwrap();
        if let Some(rental) = store.rentals.remove(id.as_ref()) {
            let d = rental.into_destruct();
            store.rentals.insert(
                *id.as_ref(),
                Rental::new(
                    d.id,
                    d.user_id,
                    d.car_id,
                    d.driver_id,
                    d.package_id,
                    d.period,
                    d.pickup_location,
                    d.dropoff_location,
                    d.airport_transfer,
                    d.concierge_services,
                    d.total_cost,
                    status,
                ),
            );
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AssistanceModifier for InMemory {
    type Transaction = NoopTransaction;
    async fn create(
        &self,
        _: &mut NoopTransaction,
        assistance: &Assistance,
    ) -> error_stack::Result<(), KernelError> {
        self.0.lock().unwrap().assistances.push(assistance.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier(Arc<Mutex<Vec<(String, String)>>>);

impl RecordingNotifier {
    fn sent(&self) -> Vec<(String, String)> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotificationGateway for RecordingNotifier {
    async fn send(&self, to: &PhoneNumber, body: &str) -> error_stack::Result<(), KernelError> {
        self.0
            .lock()
            .unwrap()
            .push((to.as_ref().clone(), body.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct FixedInvoicer;

#[async_trait::async_trait]
impl InvoiceGateway for FixedInvoicer {
    async fn create(&self, _: &InvoiceDraft) -> error_stack::Result<InvoiceUrl, KernelError> {
        Ok(InvoiceUrl::new("https://invoice.test/fixed"))
    }
}

#[derive(Default)]
struct PlainEncoder;

impl PasswordEncoder for PlainEncoder {
    fn hash(&self, raw: &str) -> error_stack::Result<PasswordHash, KernelError> {
        Ok(PasswordHash::new(format!("plain:{raw}")))
    }
    fn verify(&self, raw: &str, hash: &PasswordHash) -> error_stack::Result<bool, KernelError> {
        Ok(hash.as_ref() == &format!("plain:{raw}"))
    }
}

#[derive(Default)]
struct StaticTokens;

impl TokenGateway for StaticTokens {
    fn issue(&self, identity: &Identity) -> error_stack::Result<AccessToken, KernelError> {
        Ok(AccessToken::new(format!("token-{}", identity.user_id().as_ref())))
    }
    fn verify(&self, _: &str) -> error_stack::Result<Identity, KernelError> {
        Err(error_stack::Report::new(KernelError::Unauthorized))
    }
}

#[derive(Default)]
struct App {
    store: InMemory,
    notifier: RecordingNotifier,
    invoicer: FixedInvoicer,
    encoder: PlainEncoder,
    tokens: StaticTokens,
}

#[async_trait::async_trait]
impl DatabaseConnection for App {
    type Transaction = NoopTransaction;
    async fn transact(&self) -> error_stack::Result<NoopTransaction, KernelError> {
        self.store.transact().await
    }
}

macro_rules! depend_on_store {
    ($depend:ident, $assoc:ident, $method:ident) => {
        impl $depend for App {
            type $assoc = InMemory;
            fn $method(&self) -> &InMemory {
                &self.store
            }
        }
    };
}

depend_on_store!(DependOnUserQuery, UserQuery, user_query);
depend_on_store!(DependOnUserModifier, UserModifier, user_modifier);
depend_on_store!(DependOnCarQuery, CarQuery, car_query);
depend_on_store!(DependOnCarModifier, CarModifier, car_modifier);
depend_on_store!(DependOnDriverQuery, DriverQuery, driver_query);
depend_on_store!(DependOnPackageQuery, PackageQuery, package_query);
depend_on_store!(DependOnMembershipQuery, MembershipQuery, membership_query);
depend_on_store!(
    DependOnMembershipModifier,
    MembershipModifier,
    membership_modifier
);
depend_on_store!(DependOnRentalQuery, RentalQuery, rental_query);
depend_on_store!(DependOnRentalModifier, RentalModifier, rental_modifier);
depend_on_store!(
    DependOnAssistanceModifier,
    AssistanceModifier,
    assistance_modifier
);

impl DependOnNotificationGateway for App {
    type NotificationGateway = RecordingNotifier;
    fn notification_gateway(&self) -> &RecordingNotifier {
        &self.notifier
    }
}

impl DependOnInvoiceGateway for App {
    type InvoiceGateway = FixedInvoicer;
    fn invoice_gateway(&self) -> &FixedInvoicer {
        &self.invoicer
    }
}

impl DependOnPasswordEncoder for App {
    type PasswordEncoder = PlainEncoder;
    fn password_encoder(&self) -> &PlainEncoder {
        &self.encoder
    }
}

impl DependOnTokenGateway for App {
    type TokenGateway = StaticTokens;
    fn token_gateway(&self) -> &StaticTokens {
        &self.tokens
    }
}

fn seed_user(app: &App, role: UserRole, deposit: f64) -> User {
    let user = User::new(
        UserId::new(Uuid::new_v4()),
        UserEmail::new(format!("{}@example.com", Uuid::new_v4())),
        PasswordHash::new("plain:secret"),
        PhoneNumber::new("6281200001111"),
        Address::new("Jl. Sudirman No. 1"),
        DepositBalance::new(deposit),
        role,
    );
    app.store
        .0
        .lock()
        .unwrap()
        .users
        .insert(*user.id().as_ref(), user.clone());
    user
}

fn seed_car(app: &App, stock: i32, daily_rate: f64) -> Car {
    let car = Car::new(
        CarId::new(Uuid::new_v4()),
        CarName::new("Alphard"),
        CarStock::new(stock),
        DailyRate::new(daily_rate),
        CarProfile::new("MPV", "Toyota", "Alphard", "automatic", 2023, "petrol", "luxury"),
    );
    app.store
        .0
        .lock()
        .unwrap()
        .cars
        .insert(*car.id().as_ref(), car.clone());
    car
}

fn seed_membership(app: &App, user: &User, tier: MembershipTier) {
    let membership = Membership::new(MembershipId::new(Uuid::new_v4()), user.id().clone(), tier);
    app.store
        .0
        .lock()
        .unwrap()
        .memberships
        .insert(*user.id().as_ref(), membership);
}

fn two_day_booking(user: &User, car: &Car) -> CreateBookingDto {
    CreateBookingDto {
        user_id: *user.id().as_ref(),
        car_id: *car.id().as_ref(),
        driver_id: None,
        package_id: None,
        rental_date: datetime!(2024-06-01 09:00 UTC),
        return_date: datetime!(2024-06-03 09:00 UTC),
        pickup_location: None,
        dropoff_location: None,
        airport_transfer: false,
        concierge_services: false,
    }
}

fn stock_of(app: &App, car: &Car) -> i32 {
    *app.store.0.lock().unwrap().cars[car.id().as_ref()]
        .stock()
        .as_ref()
}

fn status_of(app: &App, rental_id: Uuid) -> RentalStatus {
    app.store.0.lock().unwrap().rentals[&rental_id]
        .status()
        .clone()
}

#[tokio::test]
async fn booking_leaves_stock_unchanged() {
    let app = App::default();
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);

    let rental = app.book(two_day_booking(&user, &car)).await.unwrap();

    assert_eq!(rental.total_cost, 1000.0);
    assert_eq!(rental.status, "Book");
    assert_eq!(stock_of(&app, &car), 1);
}

#[tokio::test]
async fn gold_member_is_charged_eighty_percent() {
    let app = App::default();
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);
    seed_membership(&app, &user, MembershipTier::Gold);

    let rental = app.book(two_day_booking(&user, &car)).await.unwrap();

    assert_eq!(rental.total_cost, 800.0);
}

#[tokio::test]
async fn booking_sends_confirmation_then_invoice_link() {
    let app = App::default();
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);

    app.book(two_day_booking(&user, &car)).await.unwrap();

    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].1.contains("Booking Confirmation"));
    assert!(sent[1].1.contains("https://invoice.test/fixed"));
}

#[tokio::test]
async fn out_of_stock_car_cannot_be_booked() {
    let app = App::default();
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 0, 500.0);

    let report = app.book(two_day_booking(&user, &car)).await.unwrap_err();
    assert_eq!(report.current_context(), &KernelError::OutOfStock);
}

#[tokio::test]
async fn payment_debits_deposit_with_no_floor() {
    let app = App::default();
    seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 100.0);
    let car = seed_car(&app, 1, 500.0);
    let rental = app.book(two_day_booking(&user, &car)).await.unwrap();

    app.make_payment(MakePaymentDto {
        user_id: *user.id().as_ref(),
        rental_id: rental.rental_id,
    })
    .await
    .unwrap();

    assert_eq!(status_of(&app, rental.rental_id), RentalStatus::Paid);
    let balance = *app.store.0.lock().unwrap().users[user.id().as_ref()]
        .deposit()
        .as_ref();
    assert_eq!(balance, -900.0);
}

#[tokio::test]
async fn payment_is_not_repeatable() {
    let app = App::default();
    seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 5000.0);
    let car = seed_car(&app, 1, 500.0);
    let rental = app.book(two_day_booking(&user, &car)).await.unwrap();
    let dto = || MakePaymentDto {
        user_id: *user.id().as_ref(),
        rental_id: rental.rental_id,
    };

    app.make_payment(dto()).await.unwrap();
    let report = app.make_payment(dto()).await.unwrap_err();

    assert_eq!(
        report.current_context(),
        &KernelError::InvalidStateTransition
    );
    let balance = *app.store.0.lock().unwrap().users[user.id().as_ref()]
        .deposit()
        .as_ref();
    assert_eq!(balance, 4000.0);
}

async fn paid_rental(app: &App, user: &User, car: &Car) -> Uuid {
    let rental = app.book(two_day_booking(user, car)).await.unwrap();
    app.make_payment(MakePaymentDto {
        user_id: *user.id().as_ref(),
        rental_id: rental.rental_id,
    })
    .await
    .unwrap();
    rental.rental_id
}

#[tokio::test]
async fn approval_takes_stock_and_starts_the_rental() {
    let app = App::default();
    let owner = seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);
    let rental_id = paid_rental(&app, &user, &car).await;

    app.process_booking(ApproveBookingDto {
        acting_user_id: *owner.id().as_ref(),
        rental_id,
        action: ApprovalAction::Approve,
    })
    .await
    .unwrap();

    assert_eq!(status_of(&app, rental_id), RentalStatus::Rent);
    assert_eq!(stock_of(&app, &car), 0);
}

#[tokio::test]
async fn approval_is_not_repeatable() {
    let app = App::default();
    let owner = seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 2, 500.0);
    let rental_id = paid_rental(&app, &user, &car).await;
    let dto = || ApproveBookingDto {
        acting_user_id: *owner.id().as_ref(),
        rental_id,
        action: ApprovalAction::Approve,
    };

    app.process_booking(dto()).await.unwrap();
    let report = app.process_booking(dto()).await.unwrap_err();

    assert_eq!(
        report.current_context(),
        &KernelError::InvalidStateTransition
    );
    assert_eq!(stock_of(&app, &car), 1);
    assert_eq!(status_of(&app, rental_id), RentalStatus::Rent);
}

#[tokio::test]
async fn approval_without_stock_is_rejected_and_changes_nothing() {
    let app = App::default();
    let owner = seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);
    let rental_id = paid_rental(&app, &user, &car).await;

    // Another approval drains the last unit out from under this booking.
    let other = paid_rental(&app, &user, &car).await;
    app.process_booking(ApproveBookingDto {
        acting_user_id: *owner.id().as_ref(),
        rental_id: other,
        action: ApprovalAction::Approve,
    })
    .await
    .unwrap();

    let report = app
        .process_booking(ApproveBookingDto {
            acting_user_id: *owner.id().as_ref(),
            rental_id,
            action: ApprovalAction::Reject,
        })
        .await;
    report.unwrap();
    assert_eq!(status_of(&app, rental_id), RentalStatus::Cancel);
}

#[tokio::test]
async fn approval_out_of_stock_leaves_the_rental_paid() {
    let app = App::default();
    let owner = seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);
    let first = paid_rental(&app, &user, &car).await;
    let second = paid_rental(&app, &user, &car).await;

    app.process_booking(ApproveBookingDto {
        acting_user_id: *owner.id().as_ref(),
        rental_id: first,
        action: ApprovalAction::Approve,
    })
    .await
    .unwrap();

    let report = app
        .process_booking(ApproveBookingDto {
            acting_user_id: *owner.id().as_ref(),
            rental_id: second,
            action: ApprovalAction::Approve,
        })
        .await
        .unwrap_err();

    assert_eq!(report.current_context(), &KernelError::OutOfStock);
    assert_eq!(status_of(&app, second), RentalStatus::Paid);
    assert_eq!(stock_of(&app, &car), 0);
}

#[tokio::test]
async fn only_owners_can_approve() {
    let app = App::default();
    seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);
    let rental_id = paid_rental(&app, &user, &car).await;

    let report = app
        .process_booking(ApproveBookingDto {
            acting_user_id: *user.id().as_ref(),
            rental_id,
            action: ApprovalAction::Approve,
        })
        .await
        .unwrap_err();

    assert_eq!(report.current_context(), &KernelError::PermissionDenied);
    assert_eq!(status_of(&app, rental_id), RentalStatus::Paid);
}

#[tokio::test]
async fn registration_rejects_duplicate_email() {
    let app = App::default();
    let dto = || RegisterUserDto {
        email: "same@example.com".to_string(),
        password: "secret".to_string(),
        phone_number: "6281200001111".to_string(),
        address: "Jl. Sudirman No. 1".to_string(),
        role: None,
    };

    app.register(dto()).await.unwrap();
    let report = app.register(dto()).await.unwrap_err();

    assert_eq!(report.current_context(), &KernelError::AlreadyExists);
}

#[tokio::test]
async fn login_rejects_a_wrong_password() {
    let app = App::default();
    app.register(RegisterUserDto {
        email: "user@example.com".to_string(),
        password: "secret".to_string(),
        phone_number: "6281200001111".to_string(),
        address: "Jl. Sudirman No. 1".to_string(),
        role: None,
    })
    .await
    .unwrap();

    let signed_in = app
        .login(LoginUserDto {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert!(!signed_in.token.is_empty());

    let report = app
        .login(LoginUserDto {
            email: "user@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::Unauthorized);
}

#[tokio::test]
async fn membership_is_registered_once() {
    let app = App::default();
    let user = seed_user(&app, UserRole::User, 0.0);

    let membership = app.register_membership(*user.id().as_ref()).await.unwrap();
    assert!(["Silver", "Gold", "Platinum"].contains(&membership.discount_level.as_str()));

    let report = app
        .register_membership(*user.id().as_ref())
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::AlreadyExists);
}

#[tokio::test]
async fn top_up_adds_to_the_balance() {
    let app = App::default();
    let user = seed_user(&app, UserRole::User, 250.0);

    let deposit = app
        .top_up(TopUpDto {
            user_id: *user.id().as_ref(),
            amount: 750.0,
        })
        .await
        .unwrap();

    assert_eq!(deposit.deposit_amount, 1000.0);
}

#[tokio::test]
async fn assistance_is_recorded_and_relayed_with_a_maps_link() {
    let app = App::default();
    seed_user(&app, UserRole::Owner, 0.0);
    let user = seed_user(&app, UserRole::User, 0.0);
    let car = seed_car(&app, 1, 500.0);
    let rental = app.book(two_day_booking(&user, &car)).await.unwrap();

    let assistance = app
        .call_assistance(CallAssistanceDto {
            user_id: *user.id().as_ref(),
            rental_id: rental.rental_id,
            description: "flat tire".to_string(),
            location: "Bundaran HI Jakarta".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        assistance.location_link,
        "https://www.google.com/maps/search/?api=1&query=Bundaran%20HI%20Jakarta"
    );
    assert_eq!(app.store.0.lock().unwrap().assistances.len(), 1);
    let sent = app.notifier.sent();
    assert!(sent.last().unwrap().1.contains("Call Assistance Request"));
}
