// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the feed and the toast
//! overlay.
//!
//! The `App` struct wires together the domains (feed, localization, display
//! queue) and translates messages into state changes. This file keeps the
//! policy decisions (window shape, tick gating, disabled-feed fallback)
//! close to the main update loop so user-facing behavior is easy to audit.

use crate::config::{self, defaults, FeedConfig};
use crate::feed;
use crate::i18n::fluent::I18n;
use crate::i18n::timeago::{Timeago, TimeagoOptions};
use crate::ui::notifications::{Manager, NotificationMessage, Toast};
use crate::ui::theming::ThemeMode;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

/// Root Iced application state that bridges the feed subscription, the
/// display queue, and localized rendering.
pub struct App {
    i18n: I18n,
    /// Relative-time formatter, fixed at startup to exclude seconds.
    timeago: Timeago,
    manager: Manager,
    theme_mode: ThemeMode,
    /// Feed parameters; `None` runs the overlay with the feed disabled.
    feed: Option<FeedConfig>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible", &self.manager.visible_count())
            .field("feed_enabled", &self.feed.is_some())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Feed(feed::Event),
    Notification(NotificationMessage),
    Tick(Instant), // Periodic tick for expiry and timeago refresh
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `TOASTY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional channel override, replacing the configured one.
    pub channel: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 360;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;

/// Builds the window settings. The overlay floats above other windows,
/// mirroring its role as a notification surface.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, 200.0)),
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted configuration and
    /// launcher flags. Runs exactly once.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref().map(Path::new)).unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        // Relative-time display is registered once, seconds excluded.
        let timeago = Timeago::new(TimeagoOptions {
            include_seconds: false,
        });

        let mut manager = Manager::new();
        if let Some(max_visible) = config.max_visible {
            manager.set_max_visible(max_visible);
        }
        if let Some(secs) = config.display_duration_secs {
            manager.set_default_dismiss(Some(Duration::from_secs(secs)));
        }

        let mut feed = config.feed;
        if let Some(channel) = flags.channel {
            if let Some(feed) = feed.as_mut() {
                feed.channel = channel;
            }
        }
        if feed.is_none() {
            log::warn!("no [feed] configuration; notifications are disabled");
        }

        let app = App {
            i18n,
            timeago,
            manager,
            theme_mode: config.theme_mode,
            feed,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let feed = match &self.feed {
            Some(config) => feed::connect(config.clone()).map(Message::Feed),
            // Missing configuration disables the feed instead of failing.
            None => Subscription::none(),
        };

        Subscription::batch([
            feed,
            create_tick_subscription(self.manager.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(feed::Event::Received(notification)) => {
                self.manager.push(notification);
            }
            Message::Feed(feed::Event::Connected) => {
                log::info!("feed connected");
            }
            Message::Feed(feed::Event::Disconnected) => {
                log::warn!("feed disconnected; waiting for the client to reconnect");
            }
            Message::Notification(message) => {
                self.manager.handle_message(&message);
            }
            Message::Tick(_) => {
                self.manager.tick();
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(&self.manager, &self.i18n, &self.timeago).map(Message::Notification)
    }
}

/// Creates the periodic tick subscription for auto-dismiss and timeago
/// refresh. While no notifications exist there is no timer at all, so
/// nothing fires after the queue drains.
fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(defaults::TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Notification;
    use tempfile::tempdir;

    fn app_without_feed() -> App {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            channel: None,
        };
        let (app, _task) = App::new(flags);
        app
    }

    fn app_from_config(toml_str: &str, flags_channel: Option<String>) -> App {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("settings.toml"), toml_str)
            .expect("failed to write settings");
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            channel: flags_channel,
        };
        let (app, _task) = App::new(flags);
        app
    }

    #[test]
    fn missing_feed_config_disables_the_feed() {
        let app = app_without_feed();
        assert!(app.feed.is_none());
        assert_eq!(app.manager.visible_count(), 0);
    }

    #[test]
    fn feed_config_is_threaded_through() {
        let app = app_from_config(
            r#"
                [feed]
                host = "localhost"
                channel = "alerts"
            "#,
            None,
        );
        let feed = app.feed.expect("feed should be configured");
        assert_eq!(feed.channel, "alerts");
        assert_eq!(feed.host, "localhost");
    }

    #[test]
    fn channel_flag_overrides_configured_channel() {
        let app = app_from_config(
            r#"
                [feed]
                host = "localhost"
                channel = "alerts"
            "#,
            Some("staging".to_string()),
        );
        assert_eq!(app.feed.expect("feed missing").channel, "staging");
    }

    #[test]
    fn received_event_appends_to_the_queue() {
        let mut app = app_without_feed();
        let _ = app.update(Message::Feed(feed::Event::Received(Notification::info(
            "Hello",
        ))));

        assert_eq!(app.manager.visible_count(), 1);
        let first = app.manager.visible().next().expect("queue is empty");
        assert_eq!(first.message(), "Hello");
    }

    #[test]
    fn dismiss_message_removes_the_record() {
        let mut app = app_without_feed();
        let notification = Notification::info("bye");
        let id = notification.id();
        let _ = app.update(Message::Feed(feed::Event::Received(notification)));

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert_eq!(app.manager.visible_count(), 0);

        // Dismissing again is a no-op, not an error.
        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert_eq!(app.manager.visible_count(), 0);
    }

    #[test]
    fn tick_message_expires_due_records() {
        let mut app = app_without_feed();
        let _ = app.update(Message::Feed(feed::Event::Received(
            Notification::info("gone").auto_dismiss(Duration::ZERO),
        )));
        assert_eq!(app.manager.visible_count(), 1);

        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.manager.visible_count(), 0);
        assert!(!app.manager.has_notifications());
    }

    #[test]
    fn display_duration_config_overrides_severity_defaults() {
        let mut app = app_from_config("display_duration_secs = 0", None);
        let _ = app.update(Message::Feed(feed::Event::Received(Notification::error(
            "sticky no more",
        ))));

        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.manager.visible_count(), 0);
    }

    #[test]
    fn connection_events_do_not_touch_the_queue() {
        let mut app = app_without_feed();
        let _ = app.update(Message::Feed(feed::Event::Connected));
        let _ = app.update(Message::Feed(feed::Event::Disconnected));
        assert!(!app.manager.has_notifications());
    }
}
