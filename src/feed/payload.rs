// SPDX-License-Identifier: MPL-2.0
//! Wire contract for notification events.
//!
//! Events are JSON objects published on the configured channel:
//!
//! ```json
//! { "id": "a1", "body": "Deploy finished", "kind": "success" }
//! ```
//!
//! `body` is required and must not be blank. `id` and `kind` are optional;
//! an absent `kind` means `info`. Unknown extra fields are tolerated so
//! publishers can evolve the schema.

use crate::error::FeedError;
use crate::ui::notifications::{Notification, Severity};
use serde::Deserialize;

/// A decoded notification event as published on the channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Payload {
    /// Source-assigned identifier, carried onto the record when present.
    #[serde(default)]
    pub id: Option<String>,
    /// The message shown to the user.
    pub body: String,
    /// Severity tag; defaults to `info`.
    #[serde(default)]
    pub kind: Severity,
}

impl Payload {
    /// Validates and decodes raw bytes from the transport.
    pub fn parse(bytes: &[u8]) -> Result<Self, FeedError> {
        let payload: Payload =
            serde_json::from_slice(bytes).map_err(|err| FeedError::InvalidJson(err.to_string()))?;
        if payload.body.trim().is_empty() {
            return Err(FeedError::MissingBody);
        }
        Ok(payload)
    }

    /// Builds the display record for this event, stamping the arrival time.
    #[must_use]
    pub fn into_notification(self) -> Notification {
        let notification = Notification::new(self.kind, self.body);
        match self.id {
            Some(id) => notification.with_source_id(id),
            None => notification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let payload =
            Payload::parse(br#"{"id":"a1","body":"Hello","kind":"info"}"#).expect("parse failed");
        assert_eq!(payload.id.as_deref(), Some("a1"));
        assert_eq!(payload.body, "Hello");
        assert_eq!(payload.kind, Severity::Info);
    }

    #[test]
    fn kind_defaults_to_info() {
        let payload = Payload::parse(br#"{"body":"plain"}"#).expect("parse failed");
        assert_eq!(payload.kind, Severity::Info);
        assert!(payload.id.is_none());
    }

    #[test]
    fn parses_every_severity_tag() {
        for (tag, severity) in [
            ("info", Severity::Info),
            ("success", Severity::Success),
            ("warning", Severity::Warning),
            ("error", Severity::Error),
        ] {
            let raw = format!(r#"{{"body":"x","kind":"{tag}"}}"#);
            let payload = Payload::parse(raw.as_bytes()).expect("parse failed");
            assert_eq!(payload.kind, severity);
        }
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Payload::parse(b"not json").expect_err("should fail");
        assert!(matches!(err, FeedError::InvalidJson(_)));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = Payload::parse(br#"{"body":"x","kind":"fatal"}"#).expect_err("should fail");
        assert!(matches!(err, FeedError::InvalidJson(_)));
    }

    #[test]
    fn rejects_missing_body() {
        let err = Payload::parse(br#"{"id":"a1"}"#).expect_err("should fail");
        assert!(matches!(err, FeedError::InvalidJson(_)));
    }

    #[test]
    fn rejects_blank_body() {
        let err = Payload::parse(br#"{"body":"   "}"#).expect_err("should fail");
        assert!(matches!(err, FeedError::MissingBody));
    }

    #[test]
    fn tolerates_unknown_fields() {
        let payload =
            Payload::parse(br#"{"body":"x","channel":"ops","ttl":30}"#).expect("parse failed");
        assert_eq!(payload.body, "x");
    }

    #[test]
    fn into_notification_carries_the_event_over() {
        let payload =
            Payload::parse(br#"{"id":"a1","body":"Hello","kind":"warning"}"#).expect("parse failed");
        let notification = payload.into_notification();

        assert_eq!(notification.message(), "Hello");
        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.source_id(), Some("a1"));
    }
}
