//! Per-sender message counts and character totals.

use std::collections::HashMap;

use serde::Serialize;

use crate::Message;

/// Message and character counts per sender.
///
/// Map iteration order is unspecified; [`senders`](Self::senders) lists the
/// senders in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of messages analyzed.
    pub total_messages: usize,
    /// Messages per sender.
    pub per_sender_count: HashMap<String, usize>,
    /// Content length in chars per sender.
    pub per_sender_chars: HashMap<String, usize>,
    senders: Vec<String>,
}

impl Statistics {
    /// Senders in first-encountered order.
    pub fn senders(&self) -> &[String] {
        &self.senders
    }

    /// Messages sent by `sender` (0 if unknown).
    pub fn count(&self, sender: &str) -> usize {
        self.per_sender_count.get(sender).copied().unwrap_or(0)
    }

    /// Characters written by `sender` (0 if unknown).
    pub fn chars(&self, sender: &str) -> usize {
        self.per_sender_chars.get(sender).copied().unwrap_or(0)
    }

    /// Sum of all content lengths.
    pub fn total_chars(&self) -> usize {
        self.per_sender_chars.values().sum()
    }

    /// Share of all messages sent by `sender`, in percent.
    pub fn share_percent(&self, sender: &str) -> f64 {
        if self.total_messages == 0 {
            return 0.0;
        }
        self.count(sender) as f64 / self.total_messages as f64 * 100.0
    }

    /// Average message length of `sender`, in chars.
    pub fn average_length(&self, sender: &str) -> f64 {
        match self.count(sender) {
            0 => 0.0,
            n => self.chars(sender) as f64 / n as f64,
        }
    }
}

/// Computes [`Statistics`] in a single pass.
pub fn stats(messages: &[Message]) -> Statistics {
    let mut stats = Statistics {
        total_messages: messages.len(),
        ..Statistics::default()
    };

    for msg in messages {
        if let Some(count) = stats.per_sender_count.get_mut(msg.sender()) {
            *count += 1;
        } else {
            stats.per_sender_count.insert(msg.sender().to_owned(), 1);
            stats.senders.push(msg.sender().to_owned());
        }

        *stats
            .per_sender_chars
            .entry(msg.sender().to_owned())
            .or_insert(0) += msg.char_count();
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Message> {
        vec![
            Message::new("Bob", "hello"),
            Message::new("Alice", "hi"),
            Message::new("Bob", "Привет"),
            Message::new("Carol", ""),
        ]
    }

    #[test]
    fn test_stats_counts_and_chars() {
        let s = stats(&sample());
        assert_eq!(s.total_messages, 4);
        assert_eq!(s.count("Bob"), 2);
        assert_eq!(s.count("Alice"), 1);
        assert_eq!(s.count("Carol"), 1);
        assert_eq!(s.chars("Bob"), 11);
        assert_eq!(s.chars("Alice"), 2);
        assert_eq!(s.chars("Carol"), 0);
        assert_eq!(s.count("Nobody"), 0);
    }

    #[test]
    fn test_stats_sums_match_totals() {
        let messages = sample();
        let s = stats(&messages);
        assert_eq!(s.per_sender_count.values().sum::<usize>(), s.total_messages);
        assert_eq!(
            s.total_chars(),
            messages.iter().map(Message::char_count).sum::<usize>()
        );
    }

    #[test]
    fn test_stats_sender_order() {
        let s = stats(&sample());
        assert_eq!(s.senders(), ["Bob", "Alice", "Carol"]);
    }

    #[test]
    fn test_stats_empty() {
        let s = stats(&[]);
        assert_eq!(s.total_messages, 0);
        assert!(s.per_sender_count.is_empty());
        assert!(s.senders().is_empty());
        assert!(s.share_percent("anyone").abs() < f64::EPSILON);
    }

    #[test]
    fn test_share_and_average() {
        let s = stats(&sample());
        assert!((s.share_percent("Bob") - 50.0).abs() < 1e-9);
        assert!((s.average_length("Bob") - 5.5).abs() < 1e-9);
        assert!(s.average_length("Nobody").abs() < f64::EPSILON);
    }
}
