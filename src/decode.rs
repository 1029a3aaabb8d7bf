//! Repair of Meta's double-encoded export text (Mojibake).
//!
//! Meta exports UTF-8 text as if every byte were an ISO-8859-1 character, so
//! each byte of a multi-byte sequence shows up as its own code point.
//! Example: "Привет" becomes "Ð\u{9f}Ñ\u{80}Ð¸Ð²ÐµÑ\u{82}".
//!
//! [`decode`] undoes that with a fixed chain of strategies, returning the
//! first one that succeeds:
//!
//! 1. [`DecodeStrategy::Latin1`]: every char is read back as its byte value
//!    (`U+0000..=U+00FF`) and the bytes are decoded as UTF-8.
//! 2. [`DecodeStrategy::Latin1Encode`]: the text is encoded to ISO-8859-1 one
//!    code unit at a time and the bytes are decoded as UTF-8. Chars above
//!    `U+00FF` have no byte, so text such as `CAFÉ—GREAT` falls through.
//! 3. [`DecodeStrategy::UnicodeEscape`]: ASCII text is read as a
//!    backslash-escaped literal (`\u00e9`, `\x41`, `\n`).
//! 4. [`DecodeStrategy::Unchanged`]: the input is returned as is.
//!
//! Decoding never fails. Plain ASCII is valid UTF-8 byte-for-byte, so it
//! always leaves step 1 unchanged.
//!
//! ```
//! use chatlens::decode::decode;
//!
//! assert_eq!(decode("Ð\u{9f}Ñ\u{80}Ð¸Ð²ÐµÑ\u{82}"), "Привет");
//! assert_eq!(decode("Hello"), "Hello");
//! assert_eq!(decode("Привет"), "Привет");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Which step of the decoding chain produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStrategy {
    /// Code points reinterpreted as ISO-8859-1 bytes.
    Latin1,
    /// Text re-encoded as ISO-8859-1 bytes.
    Latin1Encode,
    /// Backslash escapes expanded.
    UnicodeEscape,
    /// No strategy applied; input returned verbatim.
    Unchanged,
}

impl std::fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStrategy::Latin1 => write!(f, "latin-1"),
            DecodeStrategy::Latin1Encode => write!(f, "latin-1-encode"),
            DecodeStrategy::UnicodeEscape => write!(f, "unicode-escape"),
            DecodeStrategy::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Repairs a possibly double-encoded string. Never fails.
pub fn decode(text: &str) -> String {
    decode_with_strategy(text).0
}

/// Like [`decode`], also reporting which strategy succeeded.
pub fn decode_with_strategy(text: &str) -> (String, DecodeStrategy) {
    if let Some(fixed) = latin1_to_utf8(text) {
        return (fixed, DecodeStrategy::Latin1);
    }
    trace!(len = text.len(), "latin-1 reinterpretation failed, trying latin-1 encode");

    if let Some(fixed) = latin1_encode_to_utf8(text) {
        return (fixed, DecodeStrategy::Latin1Encode);
    }
    trace!(len = text.len(), "latin-1 encode failed, trying unicode escapes");

    if let Some(fixed) = unescape_unicode(text) {
        return (fixed, DecodeStrategy::UnicodeEscape);
    }
    trace!(len = text.len(), "no decoding strategy applied, keeping text");

    (text.to_owned(), DecodeStrategy::Unchanged)
}

/// Decodes string values and passes every other JSON value through untouched.
pub fn decode_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(decode(&s)),
        other => other,
    }
}

/// Reads every char as one ISO-8859-1 byte and decodes the bytes as UTF-8.
///
/// Returns `None` if a char is above `U+00FF` or the bytes are not valid UTF-8.
pub fn latin1_to_utf8(text: &str) -> Option<String> {
    if text.is_ascii() {
        return Some(text.to_owned());
    }

    let bytes = text
        .chars()
        .map(|c| u8::try_from(c).ok())
        .collect::<Option<Vec<u8>>>()?;

    String::from_utf8(bytes).ok()
}

/// Encodes the text to ISO-8859-1 bytes and decodes them as UTF-8.
///
/// Same codec as [`latin1_to_utf8`], without the ASCII shortcut. Returns
/// `None` if a scalar value is above `0xFF` or the bytes are not valid UTF-8.
pub fn latin1_encode_to_utf8(text: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        bytes.push(u8::try_from(u32::from(c)).ok()?);
    }
    String::from_utf8(bytes).ok()
}

/// Expands backslash escapes in ASCII text.
///
/// Supports `\\ \' \" \a \b \f \n \r \t \v`, line continuations, octal
/// `\ooo`, `\xhh`, `\uXXXX` (surrogate pairs are joined) and `\UXXXXXXXX`.
/// An unknown escape such as `\q` is kept literally.
///
/// Returns `None` for non-ASCII input, a trailing backslash, malformed hex
/// digits, a lone surrogate or a `\N{...}` name escape.
pub fn unescape_unicode(text: &str) -> Option<String> {
    if !text.is_ascii() {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let escape = chars.next()?;
        match escape {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut value = escape.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value)?);
            }
            'x' => out.push(char::from_u32(read_hex(&mut chars, 2)?)?),
            'u' => {
                let unit = read_hex(&mut chars, 4)?;
                out.push(join_surrogates(unit, &mut chars)?);
            }
            'U' => out.push(char::from_u32(read_hex(&mut chars, 8)?)?),
            'N' => return None,
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    Some(out)
}

fn read_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, digits: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

/// Turns a `\uXXXX` unit into a char, consuming a following low surrogate
/// escape when `unit` is a high surrogate.
fn join_surrogates(
    unit: u32,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Option<char> {
    if !(0xD800..=0xDBFF).contains(&unit) {
        return char::from_u32(unit);
    }

    if chars.next()? != '\\' || chars.next()? != 'u' {
        return None;
    }
    let low = read_hex(chars, 4)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
}
