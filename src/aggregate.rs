//! Loading several archives and merging them into one message list.
//!
//! A conversation export is usually split into `message_1.json`,
//! `message_2.json`, ... [`load_archives`] parses each file on its own, so one
//! unreadable file only empties its own slot. [`merge`] then concatenates the
//! results.
//!
//! ```rust,no_run
//! use chatlens::aggregate::{load_archives, merge};
//! use chatlens::parser::ArchiveParser;
//!
//! let loaded = load_archives(&ArchiveParser::new(), ["message_1.json", "message_2.json"]);
//! for failure in loaded.iter().filter_map(|l| l.error()) {
//!     eprintln!("skipped: {failure}");
//! }
//! let merged = merge(loaded.into_iter().map(|l| l.into_archive()));
//! println!("{} messages", merged.messages.len());
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::Message;
use crate::error::{ChatlensError, Result};
use crate::parser::{ArchiveParser, ParsedArchive};

/// Outcome of loading one archive file.
#[derive(Debug)]
pub struct LoadedArchive {
    /// The path that was loaded.
    pub path: PathBuf,
    /// The parsed archive, or why it could not be read.
    pub result: Result<ParsedArchive>,
}

impl LoadedArchive {
    /// Returns `true` if the archive was read and parsed.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the load error, if any.
    pub fn error(&self) -> Option<&ChatlensError> {
        self.result.as_ref().err()
    }

    /// Number of accepted messages (0 for a failed load).
    pub fn message_count(&self) -> usize {
        self.result.as_ref().map_or(0, |a| a.messages.len())
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// The parsed archive, or an empty one if loading failed.
    pub fn into_archive(self) -> ParsedArchive {
        self.result.unwrap_or_default()
    }
}

/// Participant set and combined messages of several archives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergedArchives {
    /// Union of all participant names, iterated in lexicographic order.
    pub participants: BTreeSet<String>,
    /// All messages: archive order, then record order within each archive.
    pub messages: Vec<Message>,
}

/// Parses one archive file, keeping a failure as a value.
pub fn load_archive(parser: &ArchiveParser, path: impl AsRef<Path>) -> LoadedArchive {
    let path = path.as_ref();
    let result = parser.parse(path);

    match &result {
        Ok(archive) => debug!(
            path = %path.display(),
            accepted = archive.summary.accepted,
            notices = archive.summary.notices,
            empty = archive.summary.empty,
            "parsed archive"
        ),
        Err(err) => warn!(path = %path.display(), error = %err, "failed to load archive"),
    }

    LoadedArchive {
        path: path.to_path_buf(),
        result,
    }
}

/// Parses every path in order. Results line up with the input order.
pub fn load_archives<I, P>(parser: &ArchiveParser, paths: I) -> Vec<LoadedArchive>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|path| load_archive(parser, path))
        .collect()
}

/// Concatenates messages in input order and unions the participants.
///
/// The merged list is not sorted by time; use
/// [`sorted_by_time`](crate::analysis::sorted_by_time) for that.
pub fn merge<I>(archives: I) -> MergedArchives
where
    I: IntoIterator<Item = ParsedArchive>,
{
    let mut merged = MergedArchives::default();
    for archive in archives {
        merged.participants.extend(archive.participants);
        merged.messages.extend(archive.messages);
    }
    merged
}
