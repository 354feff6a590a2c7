use crate::controller::Intake;
use application::transfer::{LoginUserDto, RegisterUserDto, TopUpDto};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
    phone_number: String,
    address: String,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct TopUpRequest {
    deposit_amount: f64,
}

pub struct UserTransformer;

impl Intake<RegisterRequest> for UserTransformer {
    type To = RegisterUserDto;
    fn emit(&self, input: RegisterRequest) -> Self::To {
        RegisterUserDto {
            email: input.email,
            password: input.password,
            phone_number: input.phone_number,
            address: input.address,
            role: input.role,
        }
    }
}

impl Intake<LoginRequest> for UserTransformer {
    type To = LoginUserDto;
    fn emit(&self, input: LoginRequest) -> Self::To {
        LoginUserDto {
            email: input.email,
            password: input.password,
        }
    }
}

impl Intake<(Uuid, TopUpRequest)> for UserTransformer {
    type To = TopUpDto;
    fn emit(&self, (user_id, req): (Uuid, TopUpRequest)) -> Self::To {
        TopUpDto {
            user_id,
            amount: req.deposit_amount,
        }
    }
}
