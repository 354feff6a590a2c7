use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use kernel::interface::gateway::{AccessToken, Identity, TokenGateway};
use kernel::prelude::entity::{UserEmail, UserId};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static JWT_SECRET: &str = "JWT_SECRET";

const TOKEN_LIFETIME_HOURS: i64 = 72;

#[derive(Serialize, Deserialize)]
struct Claims {
    user_id: Uuid,
    email: String,
    exp: i64,
}

/// HS256-signed bearer tokens carrying the user id and email.
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtTokenIssuer {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let secret = env(JWT_SECRET)?;
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }
}

impl TokenGateway for JwtTokenIssuer {
    fn issue(&self, identity: &Identity) -> error_stack::Result<AccessToken, KernelError> {
        let claims = Claims {
            user_id: *identity.user_id().as_ref(),
            email: identity.email().as_ref().clone(),
            exp: (OffsetDateTime::now_utc() + Duration::hours(TOKEN_LIFETIME_HOURS))
                .unix_timestamp(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(AccessToken::new(token))
    }

    fn verify(&self, token: &str) -> error_stack::Result<Identity, KernelError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(Identity::new(
            UserId::new(data.claims.user_id),
            UserEmail::new(data.claims.email),
        ))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::gateway::{Identity, TokenGateway};
    use kernel::prelude::entity::{UserEmail, UserId};

    use super::JwtTokenIssuer;

    fn issuer() -> JwtTokenIssuer {
        std::env::set_var("JWT_SECRET", "not-a-production-secret");
        JwtTokenIssuer::new().unwrap()
    }

    #[test]
    fn issued_token_verifies_to_the_same_identity() {
        let issuer = issuer();
        let identity = Identity::new(
            UserId::new(uuid::Uuid::new_v4()),
            UserEmail::new("driver@example.com"),
        );
        let token = issuer.issue(&identity).unwrap();
        let verified = issuer.verify(token.as_ref()).unwrap();
        assert_eq!(verified, identity);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let issuer = issuer();
        assert!(issuer.verify("definitely.not.ajwt").is_err());
    }
}
