//! Toast queue: display lifetime and stacking of notifications

use crate::notifications::Notification;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;
/// Default number of toasts stacked at once
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.duration
    }
}

/// Queue of active toasts, oldest first
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    max_visible: usize,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE_TOASTS, DEFAULT_TOAST_DURATION_MS)
    }
}

impl ToastQueue {
    pub fn new(max_visible: usize, duration_ms: u64) -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: max_visible.max(1),
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Show a notification, evicting the oldest toast past the limit
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, notification: Notification, now: Instant) {
        self.toasts.push_back(Toast {
            notification,
            created_at: now,
            duration: self.duration,
        });
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
    }

    /// Remove expired toasts (call before rendering)
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
