//! Word frequency tables.
//!
//! Tokenization is intentionally simple and language-agnostic: content is
//! lower-cased, a fixed set of ASCII punctuation is replaced with spaces and
//! the rest is split on Unicode whitespace. Emoji and non-Latin scripts stay
//! part of the words they appear in.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::Message;

/// Default size of a frequency table.
pub const DEFAULT_TOP_WORDS: usize = 50;

/// Default minimum word length, in chars.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 1;

/// Characters replaced with spaces before splitting.
pub const PUNCTUATION: &[char] = &[
    ',', '.', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// `(word, count)` pairs, most frequent first.
pub type WordCount = Vec<(String, usize)>;

/// Splits content into lower-cased words of at least `min_length` chars.
///
/// ```
/// use chatlens::analysis::tokenize;
///
/// assert_eq!(tokenize("Hi! Hi? HI.", 1), vec!["hi", "hi", "hi"]);
/// assert_eq!(tokenize("a (big) deal", 2), vec!["big", "deal"]);
/// ```
pub fn tokenize(content: &str, min_length: usize) -> Vec<String> {
    content
        .to_lowercase()
        .replace(PUNCTUATION, " ")
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_length)
        .map(str::to_owned)
        .collect()
}

/// The `top_n` most frequent words, optionally restricted to one sender.
///
/// Words with equal counts keep the order in which they were first seen.
pub fn word_frequency(
    messages: &[Message],
    sender: Option<&str>,
    top_n: usize,
    min_length: usize,
) -> WordCount {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: WordCount = Vec::new();

    for msg in messages
        .iter()
        .filter(|m| sender.is_none_or(|s| m.sender() == s))
    {
        for word in tokenize(msg.content(), min_length) {
            if let Some(&i) = index.get(&word) {
                counts[i].1 += 1;
            } else {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts.truncate(top_n);
    counts
}

/// One frequency table per distinct sender, keyed by sender name.
pub fn word_frequency_by_sender(
    messages: &[Message],
    top_n: usize,
    min_length: usize,
) -> BTreeMap<String, WordCount> {
    let senders: BTreeSet<&str> = messages.iter().map(Message::sender).collect();

    senders
        .into_iter()
        .map(|sender| {
            (
                sender.to_owned(),
                word_frequency(messages, Some(sender), top_n, min_length),
            )
        })
        .collect()
}
