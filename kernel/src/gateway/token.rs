use vodca::{AsRefln, Fromln, References};

use crate::entity::{UserEmail, UserId};
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

/// Verified identity claim. Produced exactly once per request by the token
/// gateway and passed by value into the core; nothing downstream re-parses
/// the raw token.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Identity {
    user_id: UserId,
    email: UserEmail,
}

impl Identity {
    pub fn new(user_id: UserId, email: UserEmail) -> Self {
        Self { user_id, email }
    }
}

pub trait TokenGateway: 'static + Sync + Send {
    fn issue(&self, identity: &Identity) -> error_stack::Result<AccessToken, KernelError>;
    fn verify(&self, token: &str) -> error_stack::Result<Identity, KernelError>;
}

pub trait DependOnTokenGateway: 'static + Sync + Send {
    type TokenGateway: TokenGateway;
    fn token_gateway(&self) -> &Self::TokenGateway;
}
