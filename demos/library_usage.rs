//! Example: Using chatlens as a library
//!
//! Builds a small mis-encoded archive in memory, parses it and runs the
//! analyses on the result.
//!
//! Run with: cargo run --example library_usage

use std::collections::BTreeSet;

use chatlens::decode::{decode, decode_with_strategy};
use chatlens::prelude::*;

/// Re-encodes UTF-8 one byte per char, as Instagram's export does.
fn mangle(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatlens Library Usage Examples ===\n");

    // Example 1: Repairing mis-encoded text
    println!("1. Repairing mis-encoded text:");
    for original in ["Привет", "😀 ok", "don’t"] {
        let broken = mangle(original);
        let (fixed, strategy) = decode_with_strategy(&broken);
        println!("   {broken:?} -> {fixed:?} ({strategy})");
    }
    println!("   Clean text is left alone: {}", decode("Hello"));

    // Example 2: Parsing an archive
    println!("\n2. Parsing an archive:");
    let json = serde_json::json!({
        "participants": [{ "name": mangle("Иван") }, { "name": "alice" }],
        "messages": [
            { "sender_name": "alice", "timestamp_ms": 1705315800000_i64, "content": "Liked a message" },
            { "sender_name": mangle("Иван"), "timestamp_ms": 1705315700000_i64, "content": mangle("Привет! Как дела?") },
            { "sender_name": "alice", "timestamp_ms": 1705315600000_i64, "share": { "link": "https://example.com" } },
            { "sender_name": "alice", "timestamp_ms": 1705315500000_i64, "content": "hey hey, long time no see" },
        ]
    })
    .to_string();

    let archive = ArchiveParser::new().parse_str(&json)?;
    println!("   Participants: {:?}", archive.participants);
    println!(
        "   {} records: {} messages, {} notices skipped",
        archive.summary.records, archive.summary.accepted, archive.summary.notices
    );

    // Example 3: Statistics
    println!("\n3. Statistics:");
    let s = stats(&archive.messages);
    for sender in s.senders() {
        println!(
            "   {sender}: {} messages ({:.1}%), {} chars",
            s.count(sender),
            s.share_percent(sender),
            s.chars(sender)
        );
    }

    // Example 4: Longest messages and timeline
    println!("\n4. Longest messages:");
    for msg in longest(&archive.messages, 2) {
        println!("   {} ({} chars)", msg.content(), msg.char_count());
    }

    println!("\n5. Timeline (oldest first):");
    for msg in sorted_by_time(&archive.messages, false) {
        println!(
            "   [{}] {}: {}",
            format_timestamp(msg.timestamp_ms()),
            msg.sender(),
            msg.content()
        );
    }

    // Example 6: Word frequencies
    println!("\n6. Top words for alice:");
    for (word, count) in word_frequency(&archive.messages, Some("alice"), 3, 2) {
        println!("   {word}: {count}");
    }

    // Example 7: Filtering
    println!("\n7. Messages from alice:");
    let filter = FilterConfig::new().with_sender("ALICE");
    for msg in apply_filters(archive.messages.clone(), &filter) {
        println!("   [{}] {}", format_timestamp(msg.timestamp_ms()), msg.content());
    }

    // Example 8: Full report
    println!("\n8. Report:");
    let participants: BTreeSet<String> = archive.participants.iter().cloned().collect();
    let report = Report::build(
        Vec::new(),
        &participants,
        &archive.messages,
        &AnalysisConfig::new().with_longest_count(3).with_top_words(5),
    );
    println!("{report}");

    println!("=== Examples complete! ===");
    Ok(())
}
