//! Filter cleaned messages by date range and sender.
//!
//! This runs after parsing, on [`Message`]s that already passed the notice
//! filter, to narrow the analysis down to a period or a person.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from specific user |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::Message;
//!
//! # fn main() -> chatlens::Result<()> {
//! let messages = vec![
//!     Message::with_metadata("Alice", "Old", 1704110400000), // 2024-01-01 12:00 UTC
//!     Message::with_metadata("Alice", "New", 1718452800000), // 2024-06-15 12:00 UTC
//!     Message::with_metadata("Bob", "Also new", 1718452800000),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_sender("alice")
//!     .with_date_from("2024-06-01")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Messages with an unknown timestamp (`0`) are **excluded** when date filters are active
//! - Day boundaries are local midnight, the same zone the report displays
//!   timestamps in; [`with_date_from_in`](FilterConfig::with_date_from_in) takes
//!   an explicit zone
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::Message;
use crate::error::ChatlensError;

/// Configuration for filtering messages by date and sender.
///
/// No filter is active by default; all messages pass through.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this instant.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this instant.
    pub before: Option<DateTime<Utc>>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from local midnight), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(self, date_str: &str) -> Result<Self, ChatlensError> {
        self.with_date_from_in(date_str, &Local)
    }

    /// Sets the end date filter (inclusive, through local 23:59:59), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(self, date_str: &str) -> Result<Self, ChatlensError> {
        self.with_date_to_in(date_str, &Local)
    }

    /// Like [`with_date_from`](Self::with_date_from), with the day starting at midnight in `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from_in<Tz: TimeZone>(
        mut self,
        date_str: &str,
        tz: &Tz,
    ) -> Result<Self, ChatlensError> {
        let start = parse_date_at(date_str, 0, 0, 0)?;
        let bound = tz
            .from_local_datetime(&start)
            .earliest()
            // midnight skipped by a DST jump
            .or_else(|| tz.from_local_datetime(&(start + TimeDelta::hours(1))).earliest())
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.after = Some(bound.with_timezone(&Utc));
        Ok(self)
    }

    /// Like [`with_date_to`](Self::with_date_to), with the day ending at 23:59:59 in `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to_in<Tz: TimeZone>(
        mut self,
        date_str: &str,
        tz: &Tz,
    ) -> Result<Self, ChatlensError> {
        let end = parse_date_at(date_str, 23, 59, 59)?;
        let bound = tz
            .from_local_datetime(&end)
            .latest()
            .or_else(|| tz.from_local_datetime(&(end - TimeDelta::hours(1))).latest())
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(bound.with_timezone(&Utc));
        Ok(self)
    }

    /// Sets the sender filter. Matches "Alice", "alice" and "ALICE" alike.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start instant directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end instant directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_sender_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the sender filter is active.
    pub fn has_sender_filter(&self) -> bool {
        self.from.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref from) = self.from {
            if !msg.sender().eq_ignore_ascii_case(from) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = msg.timestamp() else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date_at(
    date_str: &str,
    hour: u32,
    min: u32,
    sec: u32,
) -> Result<NaiveDateTime, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .ok_or_else(|| ChatlensError::invalid_date(date_str))
}

/// Keeps only the messages matching every active filter, in their original order.
///
/// Returns the input unchanged when no filter is active.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
