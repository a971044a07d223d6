//! bcrypt implementation of the password verifier.

use async_trait::async_trait;

use crate::domain::repositories::PasswordVerifier;
use crate::error::AppError;

/// Lowest work factor bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Password verifier backed by bcrypt.
///
/// Hashing and comparison are CPU-bound, so both run on the blocking pool and
/// the async caller only awaits the result.
#[derive(Debug, Clone)]
pub struct BcryptVerifier {
    cost: u32,
}

impl BcryptVerifier {
    /// Creates a verifier hashing with the given work factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptVerifier {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordVerifier for BcryptVerifier {
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password verification error: {e}")))
    }

    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(&password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))
    }
}
