//! Archive parser: one exported document in, participants and messages out.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlens::parser::ArchiveParser;
//!
//! let parser = ArchiveParser::new();
//! let archive = parser.parse("message_1.json")?;
//! println!("{} participants, {} messages", archive.participants.len(), archive.messages.len());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! Record order is preserved: messages come out in the order the archive
//! stores them, with no re-sorting.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::Message;
use crate::config::ArchiveConfig;
use crate::decode::decode;
use crate::error::{ChatlensError, Result};
use crate::parsing::{RawArchive, RecordOutcome, extract_message};

/// Participants and cleaned messages of one archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedArchive {
    /// Participant names in archive order; duplicates are kept.
    pub participants: Vec<String>,
    /// Accepted messages in archive order.
    pub messages: Vec<Message>,
    /// What happened to each record.
    pub summary: ParseSummary,
}

impl ParsedArchive {
    /// Returns `true` if the archive has neither participants nor messages.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() && self.messages.is_empty()
    }
}

/// Record bookkeeping for one parsed archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    /// Records found in the `messages` array.
    pub records: usize,
    /// Records that became messages.
    pub accepted: usize,
    /// Likes, reactions and edit notices dropped by the filter.
    pub notices: usize,
    /// Records without content or a shared link.
    pub empty: usize,
}

/// Parser for exported chat archives.
#[derive(Debug, Clone, Default)]
pub struct ArchiveParser {
    config: ArchiveConfig,
}

impl ArchiveParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ArchiveConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Reads and parses an archive file.
    ///
    /// Fails with [`ChatlensError::Io`] if the file can't be read and
    /// [`ChatlensError::Parse`] if it isn't a valid archive document.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<ParsedArchive> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let raw: RawArchive = serde_json::from_slice(&bytes)
            .map_err(|e| ChatlensError::parse(e, Some(path.to_path_buf())))?;
        Ok(self.parse_raw(raw))
    }

    /// Parses an archive held in a string.
    pub fn parse_str(&self, content: &str) -> Result<ParsedArchive> {
        let raw: RawArchive =
            serde_json::from_str(content).map_err(|e| ChatlensError::parse(e, None))?;
        Ok(self.parse_raw(raw))
    }

    /// Parses an archive held in a byte buffer.
    pub fn parse_slice(&self, bytes: &[u8]) -> Result<ParsedArchive> {
        let raw: RawArchive =
            serde_json::from_slice(bytes).map_err(|e| ChatlensError::parse(e, None))?;
        Ok(self.parse_raw(raw))
    }

    /// Converts an already deserialized document.
    pub fn parse_raw(&self, raw: RawArchive) -> ParsedArchive {
        let participants = raw
            .participants
            .into_iter()
            .map(|p| {
                let name = p.name.unwrap_or_default();
                if self.config.fix_encoding {
                    decode(&name)
                } else {
                    name
                }
            })
            .collect();

        let mut summary = ParseSummary {
            records: raw.messages.len(),
            ..ParseSummary::default()
        };
        let mut messages = Vec::with_capacity(raw.messages.len());

        for record in &raw.messages {
            match extract_message(record, &self.config) {
                RecordOutcome::Accepted(msg) => messages.push(msg),
                RecordOutcome::Notice(_) => summary.notices += 1,
                RecordOutcome::Empty => summary.empty += 1,
            }
        }
        summary.accepted = messages.len();

        ParsedArchive {
            participants,
            messages,
            summary,
        }
    }
}

/// Parses an archive file with the default configuration.
///
/// ```rust,no_run
/// let archive = chatlens::parse_archive("inbox/alice/message_1.json")?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn parse_archive(path: impl AsRef<Path>) -> Result<ParsedArchive> {
    ArchiveParser::new().parse(path)
}
