//! Raw archive structures and record-level parsing.
//!
//! An archive document looks like:
//!
//! ```json
//! {
//!   "participants": [{"name": "alice"}, {"name": "bob"}],
//!   "messages": [
//!     {"sender_name": "bob", "timestamp_ms": 1705315860000, "content": "hello"},
//!     {"sender_name": "alice", "timestamp_ms": 1705315800000, "share": {"link": "https://example.com"}}
//!   ]
//! }
//! ```
//!
//! Unknown fields are ignored and every known field is optional.

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::config::ArchiveConfig;
use crate::decode::decode;

/// Exact content of a "like" notice.
pub const LIKED_A_MESSAGE: &str = "Liked a message";

/// Top-level archive document.
#[derive(Debug, Default, Deserialize)]
pub struct RawArchive {
    #[serde(default)]
    pub participants: Vec<RawParticipant>,
    #[serde(default)]
    pub messages: Vec<RawMessageRecord>,
}

/// Entry of the `participants` array.
#[derive(Debug, Default, Deserialize)]
pub struct RawParticipant {
    #[serde(default)]
    pub name: Option<String>,
}

/// One record of the `messages` array, as stored.
#[derive(Debug, Default, Deserialize)]
pub struct RawMessageRecord {
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub share: Option<RawShare>,
}

/// Nested `share` object.
#[derive(Debug, Default, Deserialize)]
pub struct RawShare {
    #[serde(default)]
    pub link: Option<String>,
}

/// Why a record was recognized as a notice rather than a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Content is exactly `"Liked a message"`.
    LikedMessage,
    /// Content starts with `"Reacted"`.
    Reaction,
    /// Content starts with `"Liked"`.
    Like,
    /// Content contains `"edited"`.
    Edit,
    /// Content contains `"to your message"`.
    ToYourMessage,
}

/// Result of turning one raw record into a message.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The record became a message.
    Accepted(Message),
    /// The record is a like, reaction or edit notice.
    Notice(NoticeKind),
    /// The record has neither `content` nor a shared link.
    Empty,
}

/// Classifies raw (not yet decoded) content as a notice.
///
/// Matching is literal and case-sensitive: `"edit this plan"` is a message,
/// `"I edited this"` is a notice.
pub fn classify_notice(content: &str) -> Option<NoticeKind> {
    if content == LIKED_A_MESSAGE {
        Some(NoticeKind::LikedMessage)
    } else if content.starts_with("Reacted") {
        Some(NoticeKind::Reaction)
    } else if content.starts_with("Liked") {
        Some(NoticeKind::Like)
    } else if content.contains("edited") {
        Some(NoticeKind::Edit)
    } else if content.contains("to your message") {
        Some(NoticeKind::ToYourMessage)
    } else {
        None
    }
}

/// Returns `true` if the raw content is a like, reaction or edit notice.
pub fn is_notice(content: &str) -> bool {
    classify_notice(content).is_some()
}

/// Text synthesized for a record that only carries a shared link.
pub fn shared_link_text(link: &str) -> String {
    format!("[Shared link: {link}]")
}

/// Turns one raw record into a [`RecordOutcome`].
///
/// A literal `content` field wins and goes through the notice filter before
/// decoding. Without one, a `share.link` becomes `[Shared link: <url>]`,
/// which is never filtered. Anything else is [`RecordOutcome::Empty`].
pub fn extract_message(record: &RawMessageRecord, config: &ArchiveConfig) -> RecordOutcome {
    let content = if let Some(raw) = record.content.as_deref() {
        if config.skip_notices {
            if let Some(kind) = classify_notice(raw) {
                return RecordOutcome::Notice(kind);
            }
        }
        if config.fix_encoding {
            decode(raw)
        } else {
            raw.to_owned()
        }
    } else {
        match record.share.as_ref().and_then(|s| s.link.as_deref()) {
            Some(link) if config.include_shared_links => shared_link_text(link),
            _ => return RecordOutcome::Empty,
        }
    };

    let sender = record.sender_name.as_deref().unwrap_or_default();
    let sender = if config.fix_encoding {
        decode(sender)
    } else {
        sender.to_owned()
    };

    RecordOutcome::Accepted(Message::with_metadata(
        sender,
        content,
        record.timestamp_ms.unwrap_or(0),
    ))
}
