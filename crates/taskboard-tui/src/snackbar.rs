/*
[INPUT]:  Notifications derived from store events and UI warnings
[OUTPUT]: Bounded queue of transient messages with auto-hide expiry
[POS]:    TUI state - snackbar model rendered by ui::snackbar
[UPDATE]: When notification stacking or expiry rules change
*/

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use taskboard_core::Notification;

#[derive(Debug, Clone)]
pub struct SnackbarEntry {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl SnackbarEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notification.auto_hide
    }
}

/// Stack of transient messages; oldest first, newest last.
#[derive(Debug)]
pub struct Snackbar {
    entries: VecDeque<SnackbarEntry>,
    max_visible: usize,
}

impl Snackbar {
    pub fn new(max_visible: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_visible,
        }
    }

    /// Show `notification`, dropping the oldest entries beyond the stack limit.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        if self.max_visible == 0 {
            return;
        }
        self.entries.push_back(SnackbarEntry {
            notification,
            shown_at: now,
        });
        while self.entries.len() > self.max_visible {
            self.entries.pop_front();
        }
    }

    /// Drop every entry whose auto-hide interval has elapsed.
    pub fn expire(&mut self, now: Instant) {
        self.entries.retain(|entry| !entry.is_expired(now));
    }

    pub fn entries(&self) -> impl Iterator<Item = &SnackbarEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time until the next entry hides, if any are showing.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.entries
            .iter()
            .map(|entry| {
                (entry.shown_at + entry.notification.auto_hide).saturating_duration_since(now)
            })
            .min()
    }
}
