//! Password hashing capability.

use crate::error::AppError;
use async_trait::async_trait;

/// Compares plaintext passwords against stored hashes and produces new hashes.
///
/// # Implementations
///
/// - [`crate::infrastructure::security::BcryptVerifier`] - bcrypt
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// Returns `Ok(true)` if `password` matches `hash`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the hash is malformed or the
    /// comparison could not run.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError>;

    /// Hashes a plaintext password for storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails.
    async fn hash(&self, password: &str) -> Result<String, AppError>;
}
