//! The cleaned message type produced by the archive parser.
//!
//! A [`Message`] is what survives parsing: its content has already been
//! decoded and it has already passed the notice filter (no reactions,
//! "Liked a message" entries or edit notices). Fields are private and there
//! are no setters, so a message cannot change after it is built.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello, world!").with_timestamp_ms(1705315800000);
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.content(), "Hello, world!");
//! assert!(msg.has_timestamp());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A decoded, filtered chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name of the author, `""` when the archive omits it |
/// | `content` | `String` | Decoded text content |
/// | `timestamp_ms` | `i64` | Milliseconds since the Unix epoch, `0` when unknown |
///
/// `timestamp_ms` is copied verbatim from the archive. A missing timestamp
/// stays `0`; it is never replaced with the current time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Message {
    sender: String,
    content: String,
    #[serde(default)]
    timestamp_ms: i64,
}

impl Message {
    /// Creates a message with an unknown (`0`) timestamp.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp_ms: 0,
        }
    }

    /// Creates a message with all fields specified.
    pub fn with_metadata(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp_ms,
        }
    }

    /// Builder method to set the timestamp in epoch milliseconds.
    ///
    /// ```rust
    /// use chatlens::Message;
    ///
    /// let msg = Message::new("Alice", "Hello").with_timestamp_ms(1_000);
    /// assert_eq!(msg.timestamp_ms(), 1_000);
    /// ```
    #[must_use]
    pub fn with_timestamp_ms(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the raw timestamp in milliseconds since the epoch (`0` if unknown).
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    /// Returns `true` if the archive recorded a timestamp for this message.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp_ms != 0
    }

    /// Returns the timestamp as a UTC instant, or `None` when unknown or out of range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if !self.has_timestamp() {
            return None;
        }
        Utc.timestamp_millis_opt(self.timestamp_ms).single()
    }

    /// Content length in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns `true` if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
