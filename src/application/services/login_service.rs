//! Admin credential verification service.

use std::sync::Arc;

use crate::domain::entities::SessionToken;
use crate::domain::repositories::{AdminRepository, PasswordVerifier};
use crate::error::AppError;

/// Verifies admin email/password pairs and issues session tokens.
///
/// The data store and the hashing library are injected, so the service holds
/// no ambient global state and can be exercised with in-memory fakes.
pub struct LoginService {
    repository: Arc<dyn AdminRepository>,
    verifier: Arc<dyn PasswordVerifier>,
}

impl LoginService {
    /// Creates a new login service.
    ///
    /// # Arguments
    ///
    /// - `repository` - admin record lookup
    /// - `verifier` - password hash comparison
    pub fn new(repository: Arc<dyn AdminRepository>, verifier: Arc<dyn PasswordVerifier>) -> Self {
        Self {
            repository,
            verifier,
        }
    }

    /// Checks the credentials and returns a session token on success.
    ///
    /// Exactly one lookup and at most one hash comparison are performed; there
    /// are no retries.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no admin has this email
    /// - [`AppError::InvalidCredential`] if the password does not match
    /// - [`AppError::Internal`] if the data store or the hash comparison fails
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AppError> {
        let admins = self.repository.find_by_email(email).await?;

        let Some(admin) = admins.into_iter().next() else {
            tracing::warn!(email, "Login rejected: unknown email");
            return Err(AppError::NotFound);
        };

        let matches = self.verifier.verify(password, &admin.password_hash).await?;

        if !matches {
            tracing::warn!(email, admin_id = admin.admin_id, "Login rejected: bad password");
            return Err(AppError::InvalidCredential);
        }

        tracing::info!(admin_id = admin.admin_id, "Admin logged in");

        Ok(SessionToken::for_admin(&admin))
    }

    /// Returns `true` if the admin data store is reachable.
    pub async fn is_store_healthy(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Admin store health probe failed");
                false
            }
        }
    }
}
