mod address;
mod deposit;
mod email;
mod id;
mod password;
mod role;

pub use self::{address::*, deposit::*, email::*, id::*, password::*, role::*};
use crate::entity::common::PhoneNumber;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure, Mutation)]
pub struct User {
    id: UserId,
    email: UserEmail,
    password: PasswordHash,
    phone_number: PhoneNumber,
    address: Address,
    deposit: DepositBalance,
    role: UserRole,
}

impl User {
    pub fn new(
        id: UserId,
        email: UserEmail,
        password: PasswordHash,
        phone_number: PhoneNumber,
        address: Address,
        deposit: DepositBalance,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            email,
            password,
            phone_number,
            address,
            deposit,
            role,
        }
    }
}
