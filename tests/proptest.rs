//! Property-based tests for chatlens.
//!
//! These tests generate random inputs to find edge cases.

use std::collections::HashSet;

use proptest::prelude::*;

use chatlens::decode::decode;
use chatlens::parsing::is_notice;
use chatlens::prelude::*;

/// Generate a random Message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        prop::sample::select(vec!["Alice", "Bob", "Charlie", "Иван", "🔥User🔥"]),
        prop::sample::select(vec![
            "Hello",
            "Hi there!",
            "How are you? you?",
            "Test message 123",
            "Привет мир",
            "",
            "   ",
            "Special;chars\"here\nnewline",
            "🎉🔥💀 emoji",
        ]),
        prop_oneof![Just(0i64), 1i64..2_000_000_000_000],
    )
        .prop_map(|(sender, content, ts)| Message::with_metadata(sender, content, ts))
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

/// Printable ASCII without going through the regex engine.
fn arb_ascii() -> impl Strategy<Value = String> {
    prop::collection::vec(0x20u8..0x7f, 0..40)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Re-encodes UTF-8 one byte per char, as the export does.
fn mangle(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // DECODING PROPERTIES
    // ============================================

    /// Plain ASCII comes back untouched
    #[test]
    fn decode_ascii_is_identity(text in arb_ascii()) {
        prop_assert_eq!(decode(&text), text);
    }

    /// Any text survives the export's byte-per-char mangling
    #[test]
    fn decode_reverses_mangling(text in any::<String>()) {
        prop_assert_eq!(decode(&mangle(&text)), text);
    }

    /// Decoding never panics
    #[test]
    fn decode_never_panics(text in any::<String>()) {
        let _ = decode(&text);
    }

    /// Decoding already-clean non-Latin text is a no-op
    #[test]
    fn decode_is_stable_on_clean_cyrillic(idx in 0usize..4) {
        let texts = ["Привет", "Как дела?", "Мир 🎉", "Тест 日本"];
        prop_assert_eq!(decode(texts[idx]), texts[idx]);
    }

    // ============================================
    // ANALYSIS PROPERTIES
    // ============================================

    /// Per-sender counts and chars add up to the totals
    #[test]
    fn stats_sums_match(messages in arb_messages(30)) {
        let s = stats(&messages);
        prop_assert_eq!(s.total_messages, messages.len());
        prop_assert_eq!(s.per_sender_count.values().sum::<usize>(), messages.len());
        prop_assert_eq!(
            s.total_chars(),
            messages.iter().map(Message::char_count).sum::<usize>()
        );
        prop_assert_eq!(s.senders().len(), s.per_sender_count.len());
    }

    /// Longest messages are bounded, non-empty and ordered
    #[test]
    fn longest_is_ordered(messages in arb_messages(30), count in 0usize..10) {
        let top = longest(&messages, count);
        prop_assert!(top.len() <= count);
        prop_assert!(top.iter().all(|m| !m.is_empty()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].char_count() >= pair[1].char_count());
        }
    }

    /// Both timeline orders are sorted and keep every message
    #[test]
    fn sorted_by_time_orders(messages in arb_messages(30)) {
        let desc = sorted_by_time(&messages, true);
        let asc = sorted_by_time(&messages, false);
        prop_assert_eq!(desc.len(), messages.len());
        prop_assert_eq!(asc.len(), messages.len());
        for pair in desc.windows(2) {
            prop_assert!(pair[0].timestamp_ms() >= pair[1].timestamp_ms());
        }
        for pair in asc.windows(2) {
            prop_assert!(pair[0].timestamp_ms() <= pair[1].timestamp_ms());
        }
    }

    /// Word tables are bounded, ordered and free of duplicates
    #[test]
    fn word_frequency_is_well_formed(
        messages in arb_messages(30),
        top_n in 0usize..20,
        min_length in 1usize..5,
    ) {
        let table = word_frequency(&messages, None, top_n, min_length);
        prop_assert!(table.len() <= top_n);

        let mut seen = HashSet::new();
        for (word, count) in &table {
            prop_assert!(word.chars().count() >= min_length);
            prop_assert!(*count > 0);
            prop_assert!(seen.insert(word.clone()), "duplicate word {}", word);
        }
        for pair in table.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// No filter means passthrough
    #[test]
    fn no_filter_is_passthrough(messages in arb_messages(20)) {
        let filtered = apply_filters(messages.clone(), &FilterConfig::new());
        prop_assert_eq!(filtered, messages);
    }

    /// Sender filter only keeps matching senders (case insensitive)
    #[test]
    fn sender_filter_only_keeps_matching(messages in arb_messages(20)) {
        let config = FilterConfig::new().with_sender("alice");
        let filtered = apply_filters(messages, &config);
        for msg in &filtered {
            prop_assert!(msg.sender().eq_ignore_ascii_case("Alice"));
        }
    }

    /// Date filters drop every message without a timestamp
    #[test]
    fn date_filter_drops_unknown_timestamps(messages in arb_messages(20)) {
        let config = FilterConfig::new().with_date_from("1970-01-02").unwrap();
        let filtered = apply_filters(messages, &config);
        prop_assert!(filtered.iter().all(Message::has_timestamp));
    }

    // ============================================
    // PARSING PROPERTIES
    // ============================================

    /// Notices never reach the parsed output
    #[test]
    fn parsed_messages_contain_no_notices(
        contents in prop::collection::vec(
            prop::sample::select(vec![
                "Liked a message",
                "Reacted 👍 to your message",
                "Liked your photo",
                "message edited",
                "hello",
                "see you",
            ]),
            0..20,
        )
    ) {
        let records: Vec<serde_json::Value> = contents
            .iter()
            .map(|c| serde_json::json!({"sender_name": "A", "content": c}))
            .collect();
        let json = serde_json::json!({ "messages": records }).to_string();

        let archive = ArchiveParser::new().parse_str(&json).unwrap();
        prop_assert!(archive.messages.iter().all(|m| !is_notice(m.content())));
        prop_assert_eq!(
            archive.summary.accepted + archive.summary.notices,
            contents.len()
        );
    }
}
