// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for the notification feed.
//!
//! This module provides an Iced subscription that connects the broker
//! client to the UI event loop, delivering decoded notifications and
//! connection state changes in transport order.
//!
//! The client owns the connection: it reconnects on its own when the event
//! loop is re-polled after an error, so no retry policy lives here. The
//! channel subscription is re-issued after every (re)connect acknowledgment
//! because the broker does not remember it across sessions.

use super::payload::Payload;
use crate::config::defaults::{FEED_CLIENT_CAPACITY, FEED_KEEP_ALIVE_SECS, FEED_RECONNECT_DELAY_SECS};
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::ui::notifications::Notification;
use iced::futures::SinkExt;
use iced::stream;
use iced::Subscription;
use rumqttc::{AsyncClient, Event as ClientEvent, MqttOptions, Packet, QoS};
use std::time::Duration;

/// Messages emitted by the feed subscription.
#[derive(Debug, Clone)]
pub enum Event {
    /// The broker acknowledged the connection and the channel is subscribed.
    Connected,
    /// The connection dropped; the client will reconnect on its own.
    Disconnected,
    /// A valid notification event arrived on the channel.
    Received(Notification),
}

/// Opens the feed subscription for the given configuration.
///
/// The subscription identity is derived from the connection target, so a
/// changed broker or channel tears the old stream down and starts a fresh
/// one, while an unchanged configuration keeps the existing connection.
pub fn connect(config: FeedConfig) -> Subscription<Event> {
    Subscription::run_with(config, |config: &FeedConfig| {
        let config = config.clone();
        stream::channel(64, move |mut output: iced::futures::channel::mpsc::Sender<Event>| async move {
            let client_id = config
                .client_id
                .clone()
                .unwrap_or_else(|| format!("toasty-{}", std::process::id()));

            let mut options = MqttOptions::new(client_id, config.host.clone(), config.port);
            options.set_keep_alive(Duration::from_secs(FEED_KEEP_ALIVE_SECS));
            if let (Some(username), Some(password)) =
                (config.username.clone(), config.password.clone())
            {
                options.set_credentials(username, password);
            }

            let (client, mut event_loop) = AsyncClient::new(options, FEED_CLIENT_CAPACITY);

            loop {
                match event_loop.poll().await {
                    Ok(ClientEvent::Incoming(Packet::ConnAck(_))) => {
                        if let Err(err) = client
                            .subscribe(config.channel.as_str(), QoS::AtLeastOnce)
                            .await
                        {
                            log::warn!("failed to subscribe to {}: {}", config.channel, err);
                            continue;
                        }
                        log::info!("listening on {}", config.channel);
                        let _ = output.send(Event::Connected).await;
                    }
                    Ok(ClientEvent::Incoming(Packet::Publish(publish))) => {
                        match Payload::parse(&publish.payload) {
                            Ok(payload) => {
                                let _ = output.send(Event::Received(payload.into_notification())).await;
                            }
                            Err(err) => {
                                // Broken toasts are dropped, not shown.
                                log::debug!("dropping event on {}: {}", publish.topic, err);
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(err) => {
                        let err = FeedError::ConnectionClosed(err.to_string());
                        log::warn!("{}", err);
                        let _ = output.send(Event::Disconnected).await;
                        // Give the client a moment before re-polling; polling
                        // again is what triggers its reconnect.
                        tokio::time::sleep(Duration::from_secs(FEED_RECONNECT_DELAY_SECS)).await;
                    }
                }
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn event_can_be_cloned() {
        let event = Event::Received(Notification::new(Severity::Info, "hello"));
        let cloned = event.clone();
        match cloned {
            Event::Received(notification) => assert_eq!(notification.message(), "hello"),
            _ => panic!("expected Received variant"),
        }
    }

    #[test]
    fn event_can_be_debugged() {
        let event = Event::Disconnected;
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("Disconnected"));
    }
}
