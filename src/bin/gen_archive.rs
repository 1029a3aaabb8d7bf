//! Synthetic archive generator for stress testing chatlens.
//!
//! Writes an Instagram-style `message_N.json` whose text is mis-encoded the
//! way real exports are, with reactions, likes, edits and shared links mixed in.
//!
//! Usage: cargo run --features gen-test --bin gen_archive -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_archive -- 100000 message_1.json

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};

const SENDERS: &[&str] = &["Alice", "Bob", "Иван", "Мария", "🔥FireUser🔥"];

const PHRASES: &[&str] = &[
    "Привет, как дела?",
    "see you tomorrow",
    "don’t forget the tickets",
    "ok 👍",
    "Это очень длинное сообщение, в котором рассказывается о поездке на море",
    "haha 😂😂😂",
    "naïve café déjà vu",
    "€5 for coffee?!",
    "村上春樹の新しい本",
    "Quote \"inside\"; semicolons; too",
];

const NOTICES: &[&str] = &[
    "Liked a message",
    "Reacted ❤ to your message",
    "Liked your photo",
    "Alice edited a message",
];

const LINKS: &[&str] = &[
    "https://www.instagram.com/p/abc123/",
    "https://example.com/article?id=42",
    "https://www.instagram.com/reel/xyz/",
];

/// Re-encodes UTF-8 text one byte per char, as the export does.
fn mangle(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

fn random_record(rng: &mut impl Rng, timestamp_ms: i64) -> Value {
    let sender = mangle(SENDERS.choose(rng).copied().unwrap_or("Alice"));

    match rng.gen_range(0..100) {
        0..=9 => json!({
            "sender_name": sender,
            "timestamp_ms": timestamp_ms,
            "content": mangle(NOTICES.choose(rng).copied().unwrap_or("Liked a message")),
        }),
        10..=14 => json!({
            "sender_name": sender,
            "timestamp_ms": timestamp_ms,
            "share": { "link": LINKS.choose(rng).copied().unwrap_or_default() },
        }),
        15..=16 => json!({
            "sender_name": sender,
            "timestamp_ms": timestamp_ms,
            "photos": [{ "uri": "photos/123.jpg" }],
        }),
        _ => {
            let words = rng.gen_range(1..=3);
            let content = (0..words)
                .filter_map(|_| PHRASES.choose(rng).copied())
                .collect::<Vec<_>>()
                .join(" ");
            json!({
                "sender_name": sender,
                "timestamp_ms": timestamp_ms,
                "content": mangle(&content),
            })
        }
    }
}

fn generate(count: usize, output: &str) -> io::Result<()> {
    let mut rng = rand::thread_rng();

    // Newest first, like real exports.
    let start_ms: i64 = 1_700_000_000_000;
    let messages: Vec<Value> = (0..count)
        .map(|i| {
            let offset = i64::try_from(count - i).unwrap_or(i64::MAX) * 60_000;
            random_record(&mut rng, start_ms.saturating_add(offset))
        })
        .collect();

    let participants: Vec<Value> = SENDERS
        .iter()
        .map(|name| json!({ "name": mangle(name) }))
        .collect();

    let archive = json!({
        "participants": participants,
        "messages": messages,
        "title": "Generated chat",
    });

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    serde_json::to_writer_pretty(&mut writer, &archive)?;
    writer.flush()
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("message_1.json", String::as_str);

    println!("Archive generator");
    println!("   Messages: {count}");
    println!("   Output:   {output}");

    let start = Instant::now();
    generate(count, output)?;
    println!("Done in {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
