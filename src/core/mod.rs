//! Post-parse processing.
//!
//! - [`filter`] - Message filtering by date and sender
//!
//! ```rust
//! use chatlens::core::{FilterConfig, Message, apply_filters};
//!
//! let messages = vec![Message::new("alice", "hi"), Message::new("bob", "yo")];
//! let kept = apply_filters(messages, &FilterConfig::new().with_sender("alice"));
//! assert_eq!(kept.len(), 1);
//! ```

pub mod filter;

pub use filter::{FilterConfig, apply_filters};

pub use crate::Message;
