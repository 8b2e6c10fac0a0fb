// SPDX-License-Identifier: MPL-2.0
//! Localization support: Fluent bundles for UI strings and the
//! relative-time formatter that renders notification ages.

pub mod fluent;
pub mod timeago;
