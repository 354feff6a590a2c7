use crate::controller::Exhaust;
use application::transfer::{DepositDto, SignedInDto, UserDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: Uuid,
    email: String,
    phone_number: String,
    address: String,
    deposit_amount: f64,
    role: String,
}

impl From<UserDto> for UserResponse {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            email: value.email,
            phone_number: value.phone_number,
            address: value.address,
            deposit_amount: value.deposit_amount,
            role: value.role,
        }
    }
}

#[derive(Debug)]
pub struct RegisteredUserResponse(UserResponse);

impl IntoResponse for RegisteredUserResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct SignedInResponse {
    user: UserResponse,
    token: String,
}

impl IntoResponse for SignedInResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct DepositResponse {
    email: String,
    deposit_amount: f64,
}

impl IntoResponse for DepositResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct UserPresenter;

impl Exhaust<UserDto> for UserPresenter {
    type To = RegisteredUserResponse;
    fn emit(&self, input: UserDto) -> Self::To {
        RegisteredUserResponse(UserResponse::from(input))
    }
}

impl Exhaust<SignedInDto> for UserPresenter {
    type To = SignedInResponse;
    fn emit(&self, input: SignedInDto) -> Self::To {
        SignedInResponse {
            user: UserResponse::from(input.user),
            token: input.token,
        }
    }
}

impl Exhaust<DepositDto> for UserPresenter {
    type To = DepositResponse;
    fn emit(&self, input: DepositDto) -> Self::To {
        DepositResponse {
            email: input.email,
            deposit_amount: input.deposit_amount,
        }
    }
}
