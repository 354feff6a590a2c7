use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, User};

#[derive(Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub deposit_amount: f64,
    pub role: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            email,
            password: _,
            phone_number,
            address,
            deposit,
            role,
        } = value.into_destruct();
        Self {
            id: id.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            address: address.into(),
            deposit_amount: deposit.into(),
            role: role.as_str().to_string(),
        }
    }
}

pub struct RegisterUserDto {
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
    pub role: Option<String>,
}

pub struct LoginUserDto {
    pub email: String,
    pub password: String,
}

/// Login result: the profile plus a fresh bearer token.
#[derive(Debug, Clone)]
pub struct SignedInDto {
    pub user: UserDto,
    pub token: String,
}

pub struct TopUpDto {
    pub user_id: Uuid,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepositDto {
    pub email: String,
    pub deposit_amount: f64,
}
