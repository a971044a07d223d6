//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and password hashing.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`security`] - bcrypt password verification

pub mod persistence;
pub mod security;
