// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The visual surface of the application is a single overlay: the stacked
//! toast list rendered by [`notifications`]. Shared infrastructure:
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification records, queue, and widget

pub mod design_tokens;
pub mod notifications;
pub mod theming;
