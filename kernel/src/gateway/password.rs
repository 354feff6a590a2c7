use crate::entity::PasswordHash;
use crate::KernelError;

pub trait PasswordEncoder: 'static + Sync + Send {
    fn hash(&self, raw: &str) -> error_stack::Result<PasswordHash, KernelError>;
    /// `Ok(false)` is a wrong password; `Err` is a malformed stored hash or
    /// an encoder failure.
    fn verify(&self, raw: &str, hash: &PasswordHash) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnPasswordEncoder: 'static + Sync + Send {
    type PasswordEncoder: PasswordEncoder;
    fn password_encoder(&self) -> &Self::PasswordEncoder;
}
