//! HTTP middleware for request processing.
//!
//! Provides the panic catch-all and observability middleware.

pub mod catch_panic;
pub mod tracing;
