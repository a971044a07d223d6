//! Owner of the toasts shown in one screen corner.
//!
//! The stack supplies each toast's dismissal callback (which removes the toast
//! from the stack) and optionally owns the auto-dismiss timer that calls
//! `close` on the caller's behalf.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::controller::{Toast, ToastController, ToastTimings};
use super::style::{Corner, Phase};
use super::view::{ToastStackView, ToastView};

/// Identifier of a toast within its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

struct Entry {
    id: ToastId,
    controller: ToastController,
    auto_close: Option<JoinHandle<()>>,
}

impl Drop for Entry {
    fn drop(&mut self) {
        if let Some(timer) = self.auto_close.take() {
            timer.abort();
        }
    }
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Toasts anchored to one corner, kept in insertion order.
///
/// Must be used inside a Tokio runtime. Dropping the stack tears down every
/// toast and cancels all pending timers.
pub struct ToastStack {
    corner: Corner,
    timings: ToastTimings,
    auto_dismiss: Option<Duration>,
    inner: Arc<Mutex<Inner>>,
}

impl ToastStack {
    /// Creates a stack whose toasts stay until closed explicitly.
    pub fn new(corner: Corner) -> Self {
        Self {
            corner,
            timings: ToastTimings::default(),
            auto_dismiss: None,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Closes every toast automatically this long after it is shown.
    pub fn with_auto_dismiss(mut self, after: Duration) -> Self {
        self.auto_dismiss = Some(after);
        self
    }

    pub fn with_timings(mut self, timings: ToastTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// Shows a new toast and returns its id.
    pub fn push(&self, toast: Toast) -> ToastId {
        let mut inner = self.inner.lock();
        let id = ToastId(inner.next_id);
        inner.next_id += 1;

        let weak = Arc::downgrade(&self.inner);
        let controller =
            ToastController::with_timings(toast, self.corner, self.timings, move || {
                remove_entry(&weak, id);
            });

        let auto_close = self.auto_dismiss.map(|after| {
            let weak = Arc::downgrade(&self.inner);
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                close_entry(&weak, id);
            })
        });

        inner.entries.push(Entry {
            id,
            controller,
            auto_close,
        });

        tracing::debug!(%id, corner = %self.corner, "Toast pushed");

        id
    }

    /// Starts the exit animation of a toast.
    ///
    /// Returns `false` if the id is unknown or the toast is already exiting.
    pub fn close(&self, id: ToastId) -> bool {
        let mut inner = self.inner.lock();
        inner
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .is_some_and(|e| e.controller.close())
    }

    /// Current phase of a toast, or `None` once it has been removed.
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        let inner = self.inner.lock();
        inner
            .entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.controller.phase())
    }

    /// Ids of the toasts currently on screen, oldest first.
    pub fn ids(&self) -> Vec<ToastId> {
        self.inner.lock().entries.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Snapshot of every toast's presentation, oldest first.
    pub fn views(&self) -> Vec<ToastView> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(|e| e.controller.view())
            .collect()
    }

    /// Renders the whole stack as HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_html(&self) -> askama::Result<String> {
        ToastStackView::new(self.corner, &self.views())?.html()
    }
}

fn remove_entry(inner: &Weak<Mutex<Inner>>, id: ToastId) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    // Detach under the lock, drop after releasing it.
    let removed = {
        let mut guard = inner.lock();
        let pos = guard.entries.iter().position(|e| e.id == id);
        pos.map(|pos| guard.entries.remove(pos))
    };

    if removed.is_some() {
        tracing::debug!(%id, "Toast removed");
    }
}

fn close_entry(inner: &Weak<Mutex<Inner>>, id: ToastId) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let mut guard = inner.lock();
    if let Some(entry) = guard.entries.iter_mut().find(|e| e.id == id) {
        entry.controller.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_push_assigns_increasing_ids() {
        let stack = ToastStack::new(Corner::TopRight);

        let a = stack.push(Toast::info("a"));
        let b = stack.push(Toast::info("b"));

        assert!(a < b);
        assert_eq!(stack.ids(), vec![a, b]);
        assert_eq!(stack.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_removes_after_exit_delay() {
        let stack = ToastStack::new(Corner::TopLeft);
        let id = stack.push(Toast::success("Saved"));

        sleep(Duration::from_millis(20)).await;
        assert_eq!(stack.phase(id), Some(Phase::Visible));

        assert!(stack.close(id));
        assert_eq!(stack.phase(id), Some(Phase::Exiting));
        assert!(!stack.close(id));

        sleep(Duration::from_millis(301)).await;
        assert_eq!(stack.phase(id), None);
        assert!(stack.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_unknown_id() {
        let stack = ToastStack::new(Corner::TopLeft);
        let id = stack.push(Toast::info("x"));

        assert!(!stack.close(ToastId(id.0 + 100)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_closes_for_caller() {
        let stack = ToastStack::new(Corner::BottomRight).with_auto_dismiss(Duration::from_secs(3));
        let id = stack.push(Toast::warning("Session expiring"));

        sleep(Duration::from_millis(2_999)).await;
        assert_eq!(stack.phase(id), Some(Phase::Visible));

        sleep(Duration::from_millis(2)).await;
        assert_eq!(stack.phase(id), Some(Phase::Exiting));

        sleep(Duration::from_millis(300)).await;
        assert!(stack.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_are_independent() {
        let stack = ToastStack::new(Corner::TopRight);
        let a = stack.push(Toast::info("a"));
        let b = stack.push(Toast::error("b"));

        sleep(Duration::from_millis(20)).await;
        stack.close(a);

        sleep(Duration::from_millis(400)).await;
        assert_eq!(stack.ids(), vec![b]);
        assert_eq!(stack.phase(b), Some(Phase::Visible));
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_html_lists_toasts() {
        let stack = ToastStack::new(Corner::TopLeft);
        stack.push(Toast::success("Logged in successfully"));

        sleep(Duration::from_millis(20)).await;

        let html = stack.render_html().unwrap();
        assert!(html.contains("fixed top-4 left-4"));
        assert!(html.contains("Logged in successfully"));
        assert!(html.contains("translate-x-0 opacity-100"));
    }
}
