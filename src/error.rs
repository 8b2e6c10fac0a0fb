// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Feed(FeedError),
}

/// Specific error types for the notification feed.
/// Malformed events are dropped at the subscription boundary; these variants
/// describe why a payload or connection was rejected.
#[derive(Debug, Clone)]
pub enum FeedError {
    /// Payload was not valid JSON or did not match the wire schema
    InvalidJson(String),

    /// Payload decoded but its `body` field was absent or blank
    MissingBody,

    /// The transport client reported a connection failure
    ConnectionClosed(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::InvalidJson(msg) => write!(f, "invalid payload: {}", msg),
            FeedError::MissingBody => write!(f, "payload has no message body"),
            FeedError::ConnectionClosed(msg) => write!(f, "connection closed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Feed(e) => write!(f, "Feed Error: {}", e),
        }
    }
}

impl From<FeedError> for Error {
    fn from(err: FeedError) -> Self {
        Error::Feed(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
