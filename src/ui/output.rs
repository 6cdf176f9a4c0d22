//! Notification channel
//!
//! Short-lived notices ("toasts") raised by the form and page controllers:
//! missing required fields, searches without results and unreachable data.
//! The CLI prints them; the TUI buffers them for its toast bar and lets them
//! expire.

use colored::Colorize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// How prominently a notice is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational
    Normal,
    /// Something failed or blocked the user
    Destructive,
}

/// A transient user-facing notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Toast {
    /// Informational notice
    #[must_use]
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Normal,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Failure notice
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Sink for toasts
///
/// # Examples
///
/// ```
/// use custfind::ui::output::{Notifier, Toast, ToastQueue};
///
/// let queue = ToastQueue::new();
/// queue.notify(Toast::normal("No results found", "Try adjusting your search criteria"));
/// assert_eq!(queue.active().len(), 1);
/// ```
pub trait Notifier: Send + Sync {
    /// Raise a notice
    fn notify(&self, toast: Toast);
}

/// CLI implementation - writes notices to stderr
///
/// Stdout is left to search results so JSON and CSV output stay parseable.
pub struct StdoutNotifier {
    quiet: bool,
}

impl StdoutNotifier {
    /// Create a new notifier; `quiet` drops informational notices
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutNotifier {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Notifier for StdoutNotifier {
    fn notify(&self, toast: Toast) {
        match toast.severity {
            Severity::Destructive => {
                eprintln!("{} {}: {}", "❌".red(), toast.title.bold(), toast.description);
            }
            Severity::Normal if !self.quiet => {
                eprintln!("{} {}", toast.title.bold(), toast.description.dimmed());
            }
            Severity::Normal => {}
        }
    }
}

/// A buffered toast with its creation time
#[derive(Debug, Clone)]
pub struct QueuedToast {
    pub toast: Toast,
    pub created_at: Instant,
}

/// Buffered notifier for the TUI toast bar
///
/// Toasts expire after a TTL. Clones share the same buffer, so the form and
/// page controllers can both push into the queue the UI reads from.
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<Vec<QueuedToast>>>,
    ttl: Duration,
}

impl ToastQueue {
    /// Create a new queue with default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    /// Create a new queue with custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<QueuedToast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Toasts that haven't expired yet, oldest first
    #[must_use]
    pub fn active(&self) -> Vec<Toast> {
        self.lock()
            .iter()
            .filter(|q| q.created_at.elapsed() < self.ttl)
            .map(|q| q.toast.clone())
            .collect()
    }

    /// The most recent unexpired toast, if any
    #[must_use]
    pub fn latest(&self) -> Option<Toast> {
        self.lock()
            .iter()
            .rev()
            .find(|q| q.created_at.elapsed() < self.ttl)
            .map(|q| q.toast.clone())
    }

    /// Drop expired toasts
    pub fn prune(&self) {
        let ttl = self.ttl;
        self.lock().retain(|q| q.created_at.elapsed() < ttl);
    }

    /// Dismiss everything
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        let mut toasts = self.lock();
        toasts.push(QueuedToast {
            toast,
            created_at: Instant::now(),
        });

        // Keep only last 20 toasts
        if toasts.len() > 20 {
            toasts.drain(0..10);
        }
    }
}
