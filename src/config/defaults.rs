// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Maximum number of toasts rendered at once; overflow waits in the backlog.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Interval between expiry/timeago ticks (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Default MQTT broker port.
pub const DEFAULT_FEED_PORT: u16 = 1883;

/// Keep-alive interval for the broker connection (in seconds).
pub const FEED_KEEP_ALIVE_SECS: u64 = 30;

/// Pause before re-polling the event loop after a connection error
/// (in seconds). The client performs the actual reconnect.
pub const FEED_RECONNECT_DELAY_SECS: u64 = 1;

/// Capacity of the client's in-flight request queue.
pub const FEED_CLIENT_CAPACITY: usize = 10;
