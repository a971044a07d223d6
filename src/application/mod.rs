//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume capability traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Admin credential verification

pub mod services;
