//! Timer-driven lifecycle of a single toast.
//!
//! ```text
//! Entering ──(enter_delay)──▶ Visible ──close()──▶ Exiting ──(exit_delay)──▶ Removed
//!     └───────────────────close()──────────────────────┘
//! ```
//!
//! Both automatic transitions run as spawned timer tasks whose handles are
//! kept by the controller. Dropping the controller aborts them, so no phase
//! change or dismissal callback can happen after teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::style::{Corner, Phase, ToastKind};
use super::view::ToastView;

/// Callback run once when the exit animation has finished.
pub type DismissCallback = Box<dyn FnOnce() + Send + 'static>;

/// Delays of the two automatic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    /// From construction until the entrance animation is committed.
    pub enter_delay: Duration,
    /// From `close()` until the toast is removed and the callback runs.
    pub exit_delay: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(10),
            exit_delay: Duration::from_millis(300),
        }
    }
}

/// Message and category of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }
}

/// Drives one displayed toast through its phases.
///
/// Must be created inside a Tokio runtime.
pub struct ToastController {
    toast: Toast,
    corner: Corner,
    timings: ToastTimings,
    phase: Arc<watch::Sender<Phase>>,
    on_dismiss: Option<DismissCallback>,
    enter_timer: Option<JoinHandle<()>>,
    exit_timer: Option<JoinHandle<()>>,
}

impl ToastController {
    /// Shows a toast with the default timings.
    pub fn show<F>(toast: Toast, corner: Corner, on_dismiss: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::with_timings(toast, corner, ToastTimings::default(), on_dismiss)
    }

    /// Shows a toast in phase `Entering` and schedules the move to `Visible`.
    pub fn with_timings<F>(
        toast: Toast,
        corner: Corner,
        timings: ToastTimings,
        on_dismiss: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, _rx) = watch::channel(Phase::Entering);
        let phase = Arc::new(tx);

        let enter_phase = Arc::clone(&phase);
        let enter_delay = timings.enter_delay;
        let enter_timer = tokio::spawn(async move {
            tokio::time::sleep(enter_delay).await;
            enter_phase.send_if_modified(|p| {
                if *p == Phase::Entering {
                    *p = Phase::Visible;
                    true
                } else {
                    false
                }
            });
        });

        tracing::debug!(kind = %toast.kind, %corner, "Toast shown");

        Self {
            toast,
            corner,
            timings,
            phase,
            on_dismiss: Some(Box::new(on_dismiss)),
            enter_timer: Some(enter_timer),
            exit_timer: None,
        }
    }

    /// Starts the exit animation.
    ///
    /// Returns `false` if the toast is already exiting or removed, in which
    /// case nothing happens. The dismissal callback therefore runs at most
    /// once however often this is called.
    pub fn close(&mut self) -> bool {
        let started = self.phase.send_if_modified(|p| match p {
            Phase::Entering | Phase::Visible => {
                *p = Phase::Exiting;
                true
            }
            Phase::Exiting | Phase::Removed => false,
        });

        if !started {
            return false;
        }

        if let Some(timer) = self.enter_timer.take() {
            timer.abort();
        }

        let Some(on_dismiss) = self.on_dismiss.take() else {
            return false;
        };

        let exit_phase = Arc::clone(&self.phase);
        let exit_delay = self.timings.exit_delay;
        self.exit_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(exit_delay).await;
            exit_phase.send_replace(Phase::Removed);
            on_dismiss();
        }));

        tracing::debug!(kind = %self.toast.kind, "Toast closing");

        true
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Receiver notified on every phase change.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn timings(&self) -> ToastTimings {
        self.timings
    }

    /// Presentation of the toast in its current phase.
    pub fn view(&self) -> ToastView {
        ToastView::new(&self.toast, self.phase(), self.corner)
    }
}

impl Drop for ToastController {
    fn drop(&mut self) {
        if let Some(timer) = self.enter_timer.take() {
            timer.abort();
        }
        if let Some(timer) = self.exit_timer.take() {
            timer.abort();
        }
    }
}
