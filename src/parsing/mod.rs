//! Archive record shapes and per-record parsing rules.
//!
//! This module holds the raw, as-exported structures and the logic that turns
//! one record into a [`Message`](crate::Message): the notice filter and the
//! content extraction priority. [`crate::parser`] drives it over a whole
//! document.

pub mod archive;

pub use archive::{
    NoticeKind, RawArchive, RawMessageRecord, RawParticipant, RawShare, RecordOutcome,
    classify_notice, extract_message, is_notice, shared_link_text,
};
