use crate::controller::Exhaust;
use application::transfer::MembershipDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    membership_id: Uuid,
    user_id: Uuid,
    email: String,
    discount_level: String,
}

impl From<MembershipDto> for MembershipResponse {
    fn from(value: MembershipDto) -> Self {
        Self {
            membership_id: value.membership_id,
            user_id: value.user_id,
            email: value.email,
            discount_level: value.discount_level,
        }
    }
}

impl IntoResponse for MembershipResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug)]
pub struct EnrolledMembershipResponse(MembershipResponse);

impl IntoResponse for EnrolledMembershipResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}

pub struct MembershipPresenter;

impl Exhaust<MembershipDto> for MembershipPresenter {
    type To = MembershipResponse;
    fn emit(&self, input: MembershipDto) -> Self::To {
        MembershipResponse::from(input)
    }
}

pub struct EnrollmentPresenter;

impl Exhaust<MembershipDto> for EnrollmentPresenter {
    type To = EnrolledMembershipResponse;
    fn emit(&self, input: MembershipDto) -> Self::To {
        EnrolledMembershipResponse(MembershipResponse::from(input))
    }
}
