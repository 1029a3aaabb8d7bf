//! Configuration types for parsing and analysis.
//!
//! Plain builder structs, usable without any CLI framework.
//!
//! - [`ArchiveConfig`] - how archive records become messages
//! - [`AnalysisConfig`] - sizes and ordering of the analytic views
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ArchiveConfig};
//! use chatlens::parser::ArchiveParser;
//!
//! let parser = ArchiveParser::with_config(ArchiveConfig::new().with_fix_encoding(true));
//! let analysis = AnalysisConfig::new().with_top_words(10).with_min_word_length(3);
//! # let _ = (parser, analysis);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::{DEFAULT_LONGEST_COUNT, DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_WORDS};

/// Configuration for archive parsing.
///
/// The defaults give the canonical behavior: text is repaired, notices are
/// dropped and shared links become `[Shared link: <url>]` messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Repair Meta's double-encoded text in content and names (default: true)
    pub fix_encoding: bool,

    /// Drop likes, reactions and edit notices (default: true)
    pub skip_notices: bool,

    /// Turn content-less records with a shared link into messages (default: true)
    pub include_shared_links: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            fix_encoding: true,
            skip_notices: true,
            include_shared_links: true,
        }
    }
}

impl ArchiveConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables encoding repair.
    #[must_use]
    pub fn with_fix_encoding(mut self, fix: bool) -> Self {
        self.fix_encoding = fix;
        self
    }

    /// Sets whether notice records are dropped.
    #[must_use]
    pub fn with_skip_notices(mut self, skip: bool) -> Self {
        self.skip_notices = skip;
        self
    }

    /// Sets whether shared links produce messages.
    #[must_use]
    pub fn with_shared_links(mut self, include: bool) -> Self {
        self.include_shared_links = include;
        self
    }
}

/// Configuration for the analytic views built by [`crate::report::Report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many longest messages to keep (default: 20)
    pub longest_count: usize,

    /// How many words per frequency table (default: 50)
    pub top_words: usize,

    /// Shortest word, in chars, counted in frequency tables (default: 1)
    pub min_word_length: usize,

    /// Timeline order, most recent first (default: true)
    pub newest_first: bool,

    /// Include the full message timeline in reports (default: true)
    pub include_timeline: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            longest_count: DEFAULT_LONGEST_COUNT,
            top_words: DEFAULT_TOP_WORDS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            newest_first: true,
            include_timeline: true,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many longest messages are kept.
    #[must_use]
    pub fn with_longest_count(mut self, count: usize) -> Self {
        self.longest_count = count;
        self
    }

    /// Sets the size of each word frequency table.
    #[must_use]
    pub fn with_top_words(mut self, top_n: usize) -> Self {
        self.top_words = top_n;
        self
    }

    /// Sets the minimum word length.
    #[must_use]
    pub fn with_min_word_length(mut self, min_length: usize) -> Self {
        self.min_word_length = min_length;
        self
    }

    /// Sets the timeline order.
    #[must_use]
    pub fn with_newest_first(mut self, newest_first: bool) -> Self {
        self.newest_first = newest_first;
        self
    }

    /// Enables or disables the timeline section.
    #[must_use]
    pub fn with_timeline(mut self, include: bool) -> Self {
        self.include_timeline = include;
        self
    }
}
