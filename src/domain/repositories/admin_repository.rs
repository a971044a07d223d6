//! Repository trait for administrator accounts.

use crate::domain::entities::{Admin, NewAdmin};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for admin credential records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdminRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Returns every admin whose email equals `email` exactly.
    ///
    /// The email column is unique, so the result holds zero or one record in
    /// practice; callers must still handle an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Vec<Admin>, AppError>;

    /// Creates a new admin.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_admin: NewAdmin) -> Result<Admin, AppError>;

    /// Lists all admins ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Admin>, AppError>;

    /// Deletes the admin with the given email.
    ///
    /// Returns `true` if a record was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Checks that the data store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
