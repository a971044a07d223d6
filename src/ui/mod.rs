//! Client-facing UI components.
//!
//! - [`toast`] - Transient notification lifecycle and rendering

pub mod toast;
