//! The combined analysis of one or more archives.
//!
//! [`Report`] gathers every view the crate computes into one serializable
//! value. Its [`Display`](fmt::Display) impl renders the plain-text layout
//! used by the `chatlens` binary:
//!
//! ```text
//! CHAT INFORMATION
//! ----------------
//!
//! Chat Participants:
//! • Alice
//! • Bob
//!
//! Files Processed:
//! • message_1.json: 2 messages
//!
//! MESSAGE STATISTICS
//! ...
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::Message;
use crate::aggregate::LoadedArchive;
use crate::analysis::{
    WordCount, format_timestamp, longest, sorted_by_time, stats, word_frequency_by_sender,
};
use crate::config::AnalysisConfig;

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    /// File name as shown to the user.
    pub file: String,
    /// Messages accepted from this file.
    pub messages: usize,
    /// Load failure, if the file was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&LoadedArchive> for SourceSummary {
    fn from(loaded: &LoadedArchive) -> Self {
        Self {
            file: loaded.display_name(),
            messages: loaded.message_count(),
            error: loaded.error().map(ToString::to_string),
        }
    }
}

/// Per-sender line of the statistics section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderSummary {
    /// Sender name after decoding.
    pub name: String,
    /// Messages sent.
    pub messages: usize,
    /// Characters sent, counted as Unicode scalar values.
    pub chars: usize,
    /// Share of all messages, `0.0..=100.0`.
    pub share_percent: f64,
    /// Mean characters per message.
    pub average_length: f64,
}

/// Everything the analysis produced, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Union of every archive's participant list, sorted.
    pub participants: Vec<String>,
    /// One entry per input file, in argument order.
    pub sources: Vec<SourceSummary>,
    /// Messages analyzed after filtering.
    pub total_messages: usize,
    /// Senders in first-seen order.
    pub senders: Vec<SenderSummary>,
    /// Longest messages, longest first.
    pub longest: Vec<Message>,
    /// Most frequent words per sender.
    pub top_words: BTreeMap<String, WordCount>,
    /// Messages in timeline order; `None` when the timeline is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<Message>>,
    #[serde(skip)]
    newest_first: bool,
}

impl Report {
    /// Runs every analysis over `messages`.
    ///
    /// `messages` is expected to be the merged (and possibly filtered) list;
    /// `sources` describe the files it came from.
    pub fn build(
        sources: Vec<SourceSummary>,
        participants: &BTreeSet<String>,
        messages: &[Message],
        config: &AnalysisConfig,
    ) -> Self {
        let statistics = stats(messages);

        let senders = statistics
            .senders()
            .iter()
            .map(|name| SenderSummary {
                name: name.clone(),
                messages: statistics.count(name),
                chars: statistics.chars(name),
                share_percent: statistics.share_percent(name),
                average_length: statistics.average_length(name),
            })
            .collect();

        let timeline = config.include_timeline.then(|| {
            sorted_by_time(messages, config.newest_first)
                .into_iter()
                .cloned()
                .collect()
        });

        Self {
            participants: participants.iter().cloned().collect(),
            sources,
            total_messages: statistics.total_messages,
            senders,
            longest: longest(messages, config.longest_count)
                .into_iter()
                .cloned()
                .collect(),
            top_words: word_frequency_by_sender(
                messages,
                config.top_words,
                config.min_word_length,
            ),
            timeline,
            newest_first: config.newest_first,
        }
    }

    /// Files that could not be loaded.
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceSummary> {
        self.sources.iter().filter(|s| s.error.is_some())
    }
}

fn write_heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.chars().count()))?;
    writeln!(f)
}

fn write_message(f: &mut fmt::Formatter<'_>, msg: &Message) -> fmt::Result {
    writeln!(
        f,
        "[{}] {} --- {}",
        format_timestamp(msg.timestamp_ms()),
        msg.sender(),
        msg.content()
    )?;
    writeln!(f)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, "CHAT INFORMATION")?;

        writeln!(f, "Chat Participants:")?;
        for participant in &self.participants {
            writeln!(f, "• {participant}")?;
        }
        writeln!(f)?;

        if !self.sources.is_empty() {
            writeln!(f, "Files Processed:")?;
            for source in &self.sources {
                match &source.error {
                    None => writeln!(f, "• {}: {} messages", source.file, source.messages)?,
                    Some(err) => writeln!(f, "• {}: failed ({err})", source.file)?,
                }
            }
            writeln!(f)?;
        }

        write_heading(f, "MESSAGE STATISTICS")?;
        writeln!(f, "• Total messages: {}", self.total_messages)?;
        for sender in &self.senders {
            writeln!(
                f,
                "• {}: {} messages ({:.1}%), {} chars, {:.1} avg",
                sender.name,
                sender.messages,
                sender.share_percent,
                sender.chars,
                sender.average_length
            )?;
        }
        writeln!(f)?;

        if !self.longest.is_empty() {
            write_heading(f, "LONGEST MESSAGES")?;
            for msg in &self.longest {
                write_message(f, msg)?;
            }
        }

        if self.top_words.values().any(|table| !table.is_empty()) {
            write_heading(f, "TOP WORDS")?;
            for (sender, table) in &self.top_words {
                writeln!(f, "{sender}:")?;
                for (word, count) in table {
                    writeln!(f, "  {word}: {count}")?;
                }
                writeln!(f)?;
            }
        }

        if let Some(timeline) = &self.timeline {
            let order = if self.newest_first {
                "Newest First"
            } else {
                "Oldest First"
            };
            write_heading(f, &format!("MESSAGES ({order})"))?;
            for msg in timeline {
                write_message(f, msg)?;
            }
        }

        Ok(())
    }
}
