//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAdminRepository`] - Admin credential lookup and management

pub mod pg_admin_repository;

pub use pg_admin_repository::PgAdminRepository;
