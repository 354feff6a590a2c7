use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash as ParsedHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use error_stack::Report;

use kernel::interface::gateway::PasswordEncoder;
use kernel::prelude::entity::PasswordHash;
use kernel::KernelError;

/// Argon2id hashing with per-password random salts.
pub struct Argon2PasswordEncoder;

impl PasswordEncoder for Argon2PasswordEncoder {
    fn hash(&self, raw: &str) -> error_stack::Result<PasswordHash, KernelError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|error| {
                Report::new(KernelError::Internal)
                    .attach_printable(format!("password hashing failed: {error}"))
            })?;
        Ok(PasswordHash::new(hash.to_string()))
    }

    fn verify(&self, raw: &str, hash: &PasswordHash) -> error_stack::Result<bool, KernelError> {
        let parsed = ParsedHash::new(hash.as_ref()).map_err(|error| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("stored password hash is malformed: {error}"))
        })?;
        match Argon2::default().verify_password(raw.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(error) => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("password verification failed: {error}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::gateway::PasswordEncoder;

    use super::Argon2PasswordEncoder;

    #[test]
    fn correct_password_verifies() {
        let encoder = Argon2PasswordEncoder;
        let hash = encoder.hash("hunter2").unwrap();
        assert!(encoder.verify("hunter2", &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_ok_false_not_err() {
        let encoder = Argon2PasswordEncoder;
        let hash = encoder.hash("hunter2").unwrap();
        assert!(!encoder.verify("hunter3", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let encoder = Argon2PasswordEncoder;
        let first = encoder.hash("hunter2").unwrap();
        let second = encoder.hash("hunter2").unwrap();
        assert_ne!(first, second);
    }
}
