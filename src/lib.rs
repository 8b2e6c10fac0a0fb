// SPDX-License-Identifier: MPL-2.0
//! `toasty` is a small toast-notification overlay built with the Iced GUI framework.
//!
//! It subscribes to a named channel on an MQTT broker and renders inbound
//! events as a stacked, auto-expiring list of toasts. The crate demonstrates
//! internationalization with Fluent, user preference management, and a
//! channel-driven Iced subscription feeding the update loop.

#![doc(html_root_url = "https://docs.rs/toasty/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod ui;
