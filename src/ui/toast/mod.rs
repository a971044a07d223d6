//! Toast notifications.
//!
//! A toast is a transient message with a category ([`ToastKind`]) shown in
//! one screen corner ([`Corner`]). Each displayed toast is driven by its own
//! [`ToastController`]:
//!
//! - created in [`Phase::Entering`]
//! - moves to [`Phase::Visible`] after a short entrance delay
//! - moves to [`Phase::Exiting`] when `close()` is called
//! - reaches [`Phase::Removed`] after the exit delay, then runs its dismissal
//!   callback exactly once
//!
//! Presentation is a pure function of (phase, corner, kind); see [`style`].
//! [`ToastStack`] owns several toasts for one corner and can auto-dismiss
//! them.

pub mod controller;
pub mod stack;
pub mod style;
pub mod view;

pub use controller::{DismissCallback, Toast, ToastController, ToastTimings};
pub use stack::{ToastId, ToastStack};
pub use style::{
    Corner, Edge, Icon, KindStyle, Phase, ToastKind, Transform, kind_style, transform,
};
pub use view::{ToastStackView, ToastView};
