// SPDX-License-Identifier: MPL-2.0
//! Real-time notification feed.
//!
//! The feed bridges the external publish/subscribe client into the Iced
//! update loop: [`subscription::connect`] opens a managed broker connection
//! and yields [`subscription::Event`]s; [`payload::Payload`] is the wire
//! contract for individual events.
//!
//! Connection retry/backoff is owned by the transport client; this module
//! only re-polls it. Malformed events are dropped here and never reach the
//! display queue.

pub mod payload;
pub mod subscription;

pub use payload::Payload;
pub use subscription::{connect, Event};
