// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications arrive from the feed, appear
//! temporarily, and leave by expiry or dismissal without blocking anything.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for ordering and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for info/success, ~5s for warnings, manual dismiss
//!   for errors (all overridable via configuration)
//! - Max visible toasts: 3 by default (others wait in a backlog)
//! - Position: bottom-right corner, newest on top

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
