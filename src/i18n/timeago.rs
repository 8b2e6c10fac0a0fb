// SPDX-License-Identifier: MPL-2.0
//! Relative-time formatting for notification ages.
//!
//! Turns "how long ago did this arrive" into a localized phrase such as
//! "less than a minute ago" or "3 minutes ago". Installed once by the
//! composition root with a fixed option set; toasts re-render the phrase
//! on every tick.

use crate::i18n::fluent::I18n;
use chrono::{DateTime, Duration, Local};

/// Options fixed at registration time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeagoOptions {
    /// When `true`, ages under a minute are bucketed into second-level
    /// phrases ("less than 10 seconds ago"). When `false`, everything
    /// under 45 seconds is "less than a minute ago".
    pub include_seconds: bool,
}

/// Relative-time formatter. Phrases resolve through the Fluent bundles so
/// they follow the active locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timeago {
    options: TimeagoOptions,
}

impl Timeago {
    #[must_use]
    pub fn new(options: TimeagoOptions) -> Self {
        Self { options }
    }

    /// Formats the elapsed time since `since` relative to now.
    pub fn format(&self, since: DateTime<Local>, i18n: &I18n) -> String {
        self.format_duration(Local::now().signed_duration_since(since), i18n)
    }

    /// Formats an elapsed duration. Negative durations (clock skew between
    /// publisher and display) are treated as "just now".
    pub fn format_duration(&self, elapsed: Duration, i18n: &I18n) -> String {
        let secs = elapsed.num_seconds().max(0);

        if secs < 60 {
            if self.options.include_seconds {
                return match secs {
                    0..=4 => i18n.tr_count("timeago-less-than-seconds", 5),
                    5..=9 => i18n.tr_count("timeago-less-than-seconds", 10),
                    10..=19 => i18n.tr_count("timeago-less-than-seconds", 20),
                    20..=39 => i18n.tr("timeago-half-a-minute"),
                    _ => i18n.tr("timeago-less-than-a-minute"),
                };
            }
            if secs < 45 {
                return i18n.tr("timeago-less-than-a-minute");
            }
            return i18n.tr_count("timeago-minutes", 1);
        }

        let minutes = (secs as f64 / 60.0).round() as i64;
        if minutes < 45 {
            return i18n.tr_count("timeago-minutes", minutes.max(1));
        }
        if minutes < 90 {
            return i18n.tr_count("timeago-hours", 1);
        }

        let hours = (minutes as f64 / 60.0).round() as i64;
        if hours < 24 {
            return i18n.tr_count("timeago-hours", hours);
        }

        let days = (secs / 86_400).max(1);
        i18n.tr_count("timeago-days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn without_seconds() -> Timeago {
        Timeago::new(TimeagoOptions {
            include_seconds: false,
        })
    }

    fn with_seconds() -> Timeago {
        Timeago::new(TimeagoOptions {
            include_seconds: true,
        })
    }

    #[test]
    fn sub_minute_is_coarse_when_seconds_excluded() {
        let i18n = english();
        let fmt = without_seconds();
        assert_eq!(
            fmt.format_duration(Duration::seconds(0), &i18n),
            "less than a minute ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::seconds(44), &i18n),
            "less than a minute ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::seconds(45), &i18n),
            "a minute ago"
        );
    }

    #[test]
    fn sub_minute_buckets_when_seconds_included() {
        let i18n = english();
        let fmt = with_seconds();
        assert_eq!(
            fmt.format_duration(Duration::seconds(3), &i18n),
            "less than 5 seconds ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::seconds(12), &i18n),
            "less than 20 seconds ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::seconds(25), &i18n),
            "half a minute ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::seconds(50), &i18n),
            "less than a minute ago"
        );
    }

    #[test]
    fn minutes_round_to_nearest() {
        let i18n = english();
        let fmt = without_seconds();
        assert_eq!(
            fmt.format_duration(Duration::seconds(60), &i18n),
            "a minute ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::seconds(130), &i18n),
            "2 minutes ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::minutes(44), &i18n),
            "44 minutes ago"
        );
    }

    #[test]
    fn hours_and_days() {
        let i18n = english();
        let fmt = without_seconds();
        assert_eq!(
            fmt.format_duration(Duration::minutes(50), &i18n),
            "about an hour ago"
        );
        assert_eq!(
            fmt.format_duration(Duration::hours(5), &i18n),
            "about 5 hours ago"
        );
        assert_eq!(fmt.format_duration(Duration::hours(26), &i18n), "a day ago");
        assert_eq!(
            fmt.format_duration(Duration::days(3), &i18n),
            "3 days ago"
        );
    }

    #[test]
    fn negative_durations_clamp_to_now() {
        let i18n = english();
        let fmt = without_seconds();
        assert_eq!(
            fmt.format_duration(Duration::seconds(-30), &i18n),
            "less than a minute ago"
        );
    }

    #[test]
    fn phrases_follow_locale() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        let fmt = without_seconds();
        assert_eq!(
            fmt.format_duration(Duration::seconds(10), &i18n),
            "il y a moins d'une minute"
        );
    }
}
