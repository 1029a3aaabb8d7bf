//! Longest-message ranking and chronological ordering.
//!
//! Both functions return a new `Vec` of references and leave the input slice
//! untouched. Both sorts are stable: messages that compare equal keep their
//! original relative order.

use std::cmp::Reverse;

use crate::Message;

/// Default size of the longest-messages list.
pub const DEFAULT_LONGEST_COUNT: usize = 20;

/// The `count` longest non-empty messages, longest first.
///
/// Length is measured in chars. Ties keep their original order.
pub fn longest(messages: &[Message], count: usize) -> Vec<&Message> {
    let mut ranked: Vec<(usize, &Message)> = messages
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| (m.char_count(), m))
        .collect();

    ranked.sort_by_key(|(len, _)| Reverse(*len));
    ranked.into_iter().take(count).map(|(_, m)| m).collect()
}

/// Messages ordered by `timestamp_ms`, most recent first when `descending`.
///
/// Unknown timestamps (`0`) sort as the oldest: first in ascending order,
/// last in descending order.
pub fn sorted_by_time(messages: &[Message], descending: bool) -> Vec<&Message> {
    let mut sorted: Vec<&Message> = messages.iter().collect();
    if descending {
        sorted.sort_by_key(|m| Reverse(m.timestamp_ms()));
    } else {
        sorted.sort_by_key(|m| m.timestamp_ms());
    }
    sorted
}
