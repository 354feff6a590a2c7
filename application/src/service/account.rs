use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::gateway::{
    DependOnPasswordEncoder, DependOnTokenGateway, Identity, PasswordEncoder, TokenGateway,
};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{
    Address, DepositBalance, PhoneNumber, User, UserEmail, UserId, UserRole,
};
use kernel::KernelError;

use crate::transfer::{LoginUserDto, RegisterUserDto, SignedInDto, UserDto};

#[async_trait::async_trait]
pub trait AccountService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnUserQuery
    + DependOnUserModifier
    + DependOnPasswordEncoder
    + DependOnTokenGateway
{
    async fn register(&self, dto: RegisterUserDto) -> error_stack::Result<UserDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let email = UserEmail::new(dto.email);
        if self
            .user_query()
            .find_by_email(&mut con, &email)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::AlreadyExists)
                .attach_printable("user already exists with this email"));
        }

        let role = match dto.role.as_deref() {
            None | Some("") => UserRole::default(),
            Some(raw) => raw.parse()?,
        };
        let password = self.password_encoder().hash(&dto.password)?;
        let user = User::new(
            UserId::new(Uuid::new_v4()),
            email,
            password,
            PhoneNumber::new(dto.phone_number),
            Address::new(dto.address),
            DepositBalance::default(),
            role,
        );
        self.user_modifier().create(&mut con, &user).await?;
        con.commit().await?;

        Ok(UserDto::from(user))
    }

    async fn login(&self, dto: LoginUserDto) -> error_stack::Result<SignedInDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let email = UserEmail::new(dto.email);
        let user = self
            .user_query()
            .find_by_email(&mut con, &email)
            .await?
            .ok_or_else(invalid_credentials)?;
        if !self
            .password_encoder()
            .verify(&dto.password, user.password())?
        {
            return Err(invalid_credentials());
        }

        let identity = Identity::new(user.id().clone(), user.email().clone());
        let token = self.token_gateway().issue(&identity)?;
        Ok(SignedInDto {
            user: UserDto::from(user),
            token: token.into(),
        })
    }
}

// The lookup miss and the password mismatch answer identically so the
// endpoint cannot be used to probe which emails are registered.
fn invalid_credentials() -> Report<KernelError> {
    Report::new(KernelError::Unauthorized).attach_printable("invalid email or password")
}

impl<T> AccountService for T where
    T: DependOnDatabaseConnection
        + DependOnUserQuery
        + DependOnUserModifier
        + DependOnPasswordEncoder
        + DependOnTokenGateway
{
}
