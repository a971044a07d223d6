//! Core domain entities.
//!
//! - [`Admin`] - A stored administrator credential entry
//! - [`NewAdmin`] - Input for creating an admin
//! - [`SessionToken`] - The opaque string returned after login

pub mod admin;
pub mod session_token;

pub use admin::{Admin, NewAdmin};
pub use session_token::SessionToken;
