//! # Chatlens
//!
//! A Rust library for repairing, cleaning and analyzing exported Instagram
//! direct-message archives.
//!
//! ## Overview
//!
//! Instagram's data download stores message text as UTF-8 bytes that were
//! re-encoded one byte per character, so Cyrillic and emoji come out as
//! mojibake (`"Ð\u{9f}Ñ\u{80}Ð¸Ð²ÐµÑ\u{82}"` instead of `"Привет"`). Chatlens:
//!
//! 1. parses one or more `message_N.json` files,
//! 2. repairs the text with a chain of decoding strategies ([`decode`]),
//! 3. drops reaction/like/edit notices and renders shared links,
//! 4. merges the archives and computes statistics, longest messages, word
//!    frequencies and a timeline ([`analysis`], [`report`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let archive = parse_archive("message_1.json")?;
//!
//!     let s = stats(&archive.messages);
//!     for sender in s.senders() {
//!         println!("{sender}: {} messages", s.count(sender));
//!     }
//!
//!     for msg in longest(&archive.messages, 5) {
//!         println!("{}: {}", msg.sender(), msg.content());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Several Archives
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! let loaded = load_archives(&ArchiveParser::new(), ["message_1.json", "message_2.json"]);
//! let sources: Vec<SourceSummary> = loaded.iter().map(SourceSummary::from).collect();
//! let merged = merge(loaded.into_iter().map(|l| l.into_archive()));
//!
//! let report = Report::build(sources, &merged.participants, &merged.messages, &AnalysisConfig::new());
//! println!("{report}");
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - The cleaned [`Message`] record
//! - [`decode`] - Mojibake repair ([`decode::decode`])
//! - [`parsing`] - Raw archive schema and notice filtering
//! - [`parser`] - [`ArchiveParser`](parser::ArchiveParser), [`parse_archive`]
//! - [`aggregate`] - Multi-file loading and [`merge`]
//! - [`analysis`] - Statistics, rankings, word frequencies, timestamp display
//! - [`report`] - [`Report`](report::Report) combining every analysis
//! - [`config`] - Parser and analysis settings
//! - [`core`] - Date and sender filters
//! - [`cli`] - CLI argument types (requires `cli` feature)
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod aggregate;
pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod decode;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod report;

pub use aggregate::merge;
pub use error::{ChatlensError, Result};
pub use message::Message;
pub use parser::parse_archive;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatlensError, Result};

    // Parsing and merging
    pub use crate::aggregate::{LoadedArchive, MergedArchives, load_archives, merge};
    pub use crate::parser::{ArchiveParser, ParsedArchive, parse_archive};

    pub use crate::config::{AnalysisConfig, ArchiveConfig};

    // Analysis
    pub use crate::analysis::{
        Statistics, format_timestamp, longest, sorted_by_time, stats, word_frequency,
        word_frequency_by_sender,
    };
    pub use crate::report::{Report, SourceSummary};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};
}
