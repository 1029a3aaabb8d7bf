//! Command-line interface definition using clap.
//!
//! [`Args`] converts into the library's configuration types so the binary
//! stays a thin pipeline:
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "message_1.json", "--top-words", "10"]);
//! assert_eq!(args.analysis_config().top_words, 10);
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnalysisConfig, ArchiveConfig};
use crate::core::filter::FilterConfig;
use crate::error::Result;

/// Repair and analyze exported Instagram chat archives.
///
/// Reads one or more `message_N.json` files, fixes mis-encoded text, drops
/// reaction/like/edit notices and prints statistics, the longest messages,
/// word frequencies and a timeline.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens message_1.json
    chatlens message_1.json message_2.json --longest 5 --no-timeline
    chatlens inbox/*.json --from alice --after 2024-01-01
    chatlens message_1.json --json > report.json")]
pub struct Args {
    /// Archive files to analyze
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Only analyze messages from this sender
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Only analyze messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyze messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Number of longest messages to show
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub longest: usize,

    /// Words per sender in the frequency tables
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub top_words: usize,

    /// Ignore words shorter than this many characters
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub min_word_length: usize,

    /// Print the timeline oldest message first
    #[arg(long)]
    pub oldest_first: bool,

    /// Leave the message timeline out of the report
    #[arg(long)]
    pub no_timeline: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Keep message text exactly as stored in the archive
    #[arg(long)]
    pub no_fix_encoding: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Parser settings for the input archives.
    pub fn archive_config(&self) -> ArchiveConfig {
        ArchiveConfig::new().with_fix_encoding(!self.no_fix_encoding)
    }

    /// Settings for the analytic views.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_longest_count(self.longest)
            .with_top_words(self.top_words)
            .with_min_word_length(self.min_word_length)
            .with_newest_first(!self.oldest_first)
            .with_timeline(!self.no_timeline)
    }

    /// Sender and date filters.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`](crate::ChatlensError::InvalidDate)
    /// for a malformed `--after` or `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_sender(from.clone());
        }
        Ok(config)
    }
}
