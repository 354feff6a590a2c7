use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::Report;
use kernel::interface::gateway::{DependOnTokenGateway, Identity, TokenGateway};
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

/// Extracts and verifies the `Authorization: Bearer` token issued at login.
/// Routes taking this extractor answer 401 before their body runs.
pub struct AuthorizedUser(pub Identity);

#[axum::async_trait]
impl FromRequestParts<AppModule> for AuthorizedUser {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ErrorStatus::from(
                        Report::new(KernelError::Unauthorized)
                            .attach_printable("missing or malformed authorization header"),
                    )
                })?;
        let identity = state
            .token_gateway()
            .verify(bearer.token())
            .map_err(ErrorStatus::from)?;
        Ok(Self(identity))
    }
}
