//! Analytic views over a cleaned message list.
//!
//! Every function here is pure: it borrows a `&[Message]`, never mutates it,
//! and holds no state between calls, so the same slice can be analyzed from
//! several threads at once.
//!
//! | View | Function |
//! |------|----------|
//! | Per-sender counts and character totals | [`stats`] |
//! | Longest messages | [`longest`] |
//! | Chronological order | [`sorted_by_time`] |
//! | Word frequency | [`word_frequency`], [`word_frequency_by_sender`] |
//! | Display timestamps | [`format_timestamp`] |
//!
//! # Example
//!
//! ```
//! use chatlens::Message;
//! use chatlens::analysis::{stats, longest, word_frequency};
//!
//! let messages = vec![
//!     Message::new("Alice", "Hi! Hi? HI."),
//!     Message::new("Bob", "hey"),
//! ];
//!
//! let s = stats(&messages);
//! assert_eq!(s.total_messages, 2);
//! assert_eq!(s.count("Alice"), 1);
//!
//! assert_eq!(longest(&messages, 1)[0].sender(), "Alice");
//! assert_eq!(word_frequency(&messages, Some("Alice"), 50, 1), vec![("hi".to_string(), 3)]);
//! ```

pub mod ranking;
pub mod stats;
pub mod timestamp;
pub mod words;

pub use ranking::{DEFAULT_LONGEST_COUNT, longest, sorted_by_time};
pub use stats::{Statistics, stats};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, format_timestamp_in};
pub use words::{
    DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_WORDS, PUNCTUATION, WordCount, tokenize, word_frequency,
    word_frequency_by_sender,
};
