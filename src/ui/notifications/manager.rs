// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the display queue: it handles ordering, display
//! timing, and dismissal of notifications. It limits the number of visible
//! toasts and promotes backlogged ones as space frees up.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::defaults::DEFAULT_MAX_VISIBLE;
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the display queue: visible notifications plus a FIFO backlog.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Backlogged notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    /// Maximum number of notifications visible at once.
    max_visible: usize,
    /// Configured display duration applied to records without one of
    /// their own.
    default_dismiss: Option<Duration>,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            max_visible: DEFAULT_MAX_VISIBLE,
            default_dismiss: None,
        }
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of simultaneously visible toasts. At least one
    /// toast is always allowed.
    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.max_visible = max_visible.max(1);
    }

    /// Sets the display duration applied to records that carry no custom
    /// duration. `None` restores the severity-based defaults.
    pub fn set_default_dismiss(&mut self, duration: Option<Duration>) {
        self.default_dismiss = duration;
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `max_visible` notifications are showing, it's displayed
    /// immediately (newest on top). Otherwise, it's added to the backlog and
    /// shown when space becomes available.
    ///
    /// Warnings and errors are logged through the `log` facade.
    pub fn push(&mut self, notification: Notification) {
        let notification = match (self.default_dismiss, notification.custom_dismiss_duration()) {
            (Some(duration), None) => notification.auto_dismiss(duration),
            _ => notification,
        };

        match notification.severity() {
            Severity::Warning => log::warn!("{}", notification.message()),
            Severity::Error => log::error!("{}", notification.message()),
            Severity::Info | Severity::Success => {}
        }

        if self.visible.len() < self.max_visible {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Idempotent: returns `true` if the notification was found and removed,
    /// `false` when the ID is already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        // Try to remove from visible
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        // Try to remove from the backlog
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick event, dismissing any notifications that have expired.
    ///
    /// Should be called periodically (e.g., every 100-500ms) to handle
    /// auto-dismiss. Expired records never survive the tick, whether they
    /// are visible or still backlogged; remaining entries keep their order.
    pub fn tick(&mut self) {
        // Purge the backlog first so promotion never surfaces a record
        // that expired while waiting.
        self.queue.retain(|n| !n.should_auto_dismiss());

        // Collect IDs of visible notifications to dismiss, oldest first
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .rev()
            .filter(|n| n.should_auto_dismiss())
            .map(super::notification::Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of backlogged notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or backlogged).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and backlogged).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes notifications from the backlog to visible while there's space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < self.max_visible {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}
