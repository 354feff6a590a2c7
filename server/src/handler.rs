use std::ops::Deref;
use std::sync::Arc;

use driver::database::{
    PostgresAssistanceRepository, PostgresCarRepository, PostgresDatabase,
    PostgresDriverRepository, PostgresMembershipRepository, PostgresPackageRepository,
    PostgresRentalRepository, PostgresTransaction, PostgresUserRepository,
};
use driver::http::{TwilioNotifier, XenditInvoicer};
use driver::security::{Argon2PasswordEncoder, JwtTokenIssuer};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::gateway::{
    DependOnInvoiceGateway, DependOnNotificationGateway, DependOnPasswordEncoder,
    DependOnTokenGateway,
};
use kernel::interface::query::{
    DependOnCarQuery, DependOnDriverQuery, DependOnMembershipQuery, DependOnPackageQuery,
    DependOnRentalQuery, DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnAssistanceModifier, DependOnCarModifier, DependOnMembershipModifier,
    DependOnRentalModifier, DependOnUserModifier,
};
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: PostgresDatabase,
    users: PostgresUserRepository,
    cars: PostgresCarRepository,
    drivers: PostgresDriverRepository,
    packages: PostgresPackageRepository,
    memberships: PostgresMembershipRepository,
    rentals: PostgresRentalRepository,
    assistances: PostgresAssistanceRepository,
    notifier: TwilioNotifier,
    invoicer: XenditInvoicer,
    tokens: JwtTokenIssuer,
    passwords: Argon2PasswordEncoder,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let database = PostgresDatabase::new().await?;
        let notifier = TwilioNotifier::new()?;
        let invoicer = XenditInvoicer::new()?;
        let tokens = JwtTokenIssuer::new()?;

        Ok(Self {
            database,
            users: PostgresUserRepository,
            cars: PostgresCarRepository,
            drivers: PostgresDriverRepository,
            packages: PostgresPackageRepository,
            memberships: PostgresMembershipRepository,
            rentals: PostgresRentalRepository,
            assistances: PostgresAssistanceRepository,
            notifier,
            invoicer,
            tokens,
            passwords: Argon2PasswordEncoder,
        })
    }
}

// Delegating the connection makes the handler its own `DatabaseConnection`,
// which satisfies every `DependOn*` bound the services place on it.
#[async_trait::async_trait]
impl DatabaseConnection for Handler {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        self.database.transact().await
    }
}

impl DependOnUserQuery for Handler {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &self.users
    }
}

impl DependOnUserModifier for Handler {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &self.users
    }
}

impl DependOnCarQuery for Handler {
    type CarQuery = PostgresCarRepository;
    fn car_query(&self) -> &Self::CarQuery {
        &self.cars
    }
}

impl DependOnCarModifier for Handler {
    type CarModifier = PostgresCarRepository;
    fn car_modifier(&self) -> &Self::CarModifier {
        &self.cars
    }
}

impl DependOnDriverQuery for Handler {
    type DriverQuery = PostgresDriverRepository;
    fn driver_query(&self) -> &Self::DriverQuery {
        &self.drivers
    }
}

impl DependOnPackageQuery for Handler {
    type PackageQuery = PostgresPackageRepository;
    fn package_query(&self) -> &Self::PackageQuery {
        &self.packages
    }
}

impl DependOnMembershipQuery for Handler {
    type MembershipQuery = PostgresMembershipRepository;
    fn membership_query(&self) -> &Self::MembershipQuery {
        &self.memberships
    }
}

impl DependOnMembershipModifier for Handler {
    type MembershipModifier = PostgresMembershipRepository;
    fn membership_modifier(&self) -> &Self::MembershipModifier {
        &self.memberships
    }
}

impl DependOnRentalQuery for Handler {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &self.rentals
    }
}

impl DependOnRentalModifier for Handler {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &self.rentals
    }
}

impl DependOnAssistanceModifier for Handler {
    type AssistanceModifier = PostgresAssistanceRepository;
    fn assistance_modifier(&self) -> &Self::AssistanceModifier {
        &self.assistances
    }
}

impl DependOnNotificationGateway for Handler {
    type NotificationGateway = TwilioNotifier;
    fn notification_gateway(&self) -> &Self::NotificationGateway {
        &self.notifier
    }
}

impl DependOnInvoiceGateway for Handler {
    type InvoiceGateway = XenditInvoicer;
    fn invoice_gateway(&self) -> &Self::InvoiceGateway {
        &self.invoicer
    }
}

impl DependOnTokenGateway for Handler {
    type TokenGateway = JwtTokenIssuer;
    fn token_gateway(&self) -> &Self::TokenGateway {
        &self.tokens
    }
}

impl DependOnPasswordEncoder for Handler {
    type PasswordEncoder = Argon2PasswordEncoder;
    fn password_encoder(&self) -> &Self::PasswordEncoder {
        &self.passwords
    }
}
