//! Toast notifications
//!
//! At most one notification is on screen. Showing a new one replaces the
//! current one outright; otherwise a notification stays for
//! [`VISIBLE_FOR`], plays a [`EXIT_FOR`] exit animation and is removed.

use std::time::{Duration, Instant};

use tracing::debug;

/// How long a toast stays fully visible.
pub const VISIBLE_FOR: Duration = Duration::from_millis(3_000);
/// Length of the exit animation.
pub const EXIT_FOR: Duration = Duration::from_millis(300);

/// Tone of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Green.
    Success,
    /// Red.
    Error,
    /// Blue.
    #[default]
    Info,
}

impl NotificationKind {
    /// Background color of the toast.
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown.
    pub message: String,
    /// Tone.
    pub kind: NotificationKind,
}

impl Notification {
    /// A toast of any kind.
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Green toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Red toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Blue toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }
}

/// Lifecycle of the current toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    /// On screen.
    Visible,
    /// Exit animation is playing.
    Leaving,
    /// Removed, or nothing was shown.
    Gone,
}

/// Single toast slot.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<(Notification, Instant)>,
    visible_for: Duration,
    exit_for: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_timing(VISIBLE_FOR, EXIT_FOR)
    }
}

impl NotificationCenter {
    /// Empty slot with the default timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty slot with custom timing.
    pub fn with_timing(visible_for: Duration, exit_for: Duration) -> Self {
        Self {
            current: None,
            visible_for,
            exit_for,
        }
    }

    /// Show `notification` as of `now`, returning the one it replaced.
    pub fn show(
        &mut self,
        notification: Notification,
        now: Instant,
    ) -> Option<Notification> {
        debug!(kind = ?notification.kind, message = %notification.message, "notification shown");
        self.current
            .replace((notification, now))
            .map(|(previous, _)| previous)
    }

    /// Where the current toast is in its lifecycle at `now`.
    pub fn state_at(&self, now: Instant) -> NotificationState {
        let Some((_, shown_at)) = &self.current else {
            return NotificationState::Gone;
        };
        let elapsed = now.saturating_duration_since(*shown_at);
        if elapsed < self.visible_for {
            NotificationState::Visible
        } else if elapsed < self.visible_for + self.exit_for {
            NotificationState::Leaving
        } else {
            NotificationState::Gone
        }
    }

    /// The notification on screen at `now`, leaving or not.
    pub fn current_at(&self, now: Instant) -> Option<&Notification> {
        match self.state_at(now) {
            NotificationState::Gone => None,
            _ => self.current.as_ref().map(|(notification, _)| notification),
        }
    }

    /// Drop the notification if it has finished its exit.
    pub fn prune(&mut self, now: Instant) {
        if self.state_at(now) == NotificationState::Gone {
            self.current = None;
        }
    }

    /// Remove the toast immediately.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take().map(|(notification, _)| notification)
    }
}
