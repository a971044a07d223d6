//! Capability trait definitions for the domain layer.
//!
//! These traits abstract the external collaborators of the login flow: the
//! admin data store and the password hashing library. Concrete
//! implementations live in `crate::infrastructure`; mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Traits
//!
//! - [`AdminRepository`] - Admin record lookup and management
//! - [`PasswordVerifier`] - Password hash comparison and creation

pub mod admin_repository;
pub mod password_verifier;

pub use admin_repository::AdminRepository;
pub use password_verifier::PasswordVerifier;

#[cfg(test)]
pub use admin_repository::MockAdminRepository;
#[cfg(test)]
pub use password_verifier::MockPasswordVerifier;
