//! The serializer (§4.9).
//!
//! Walks the tree, appending to a [`ByteScratch`], with a specialized
//! string emitter that pre-reserves the worst-case length, following
//! leptjson's `lept_stringify_string` (pre-reserve `6 * len + 2`, then trim
//! the unused tail). Number formatting uses `ryu` in place of leptjson's
//! `%.17g`, producing the shortest round-trippable decimal directly.

use alloc::string::String;

use crate::buffer::ByteScratch;
use crate::value::Value;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Serializes `value` to a JSON text.
pub(crate) fn to_string(value: &Value) -> String {
    let mut scratch = ByteScratch::new();
    write_value(&mut scratch, value);
    let bytes = scratch.pop(scratch.len());
    // Every byte pushed by `write_value` originates from ASCII punctuation,
    // a `ryu`-formatted float (ASCII), or `write_string`'s escaper (which
    // only ever copies already-valid-UTF-8 bytes verbatim or emits ASCII
    // escapes), so `bytes` is always valid UTF-8.
    String::from_utf8(bytes).expect("serializer only ever emits valid UTF-8")
}

fn write_value(out: &mut ByteScratch, value: &Value) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(out, item);
            }
            out.push(b']');
        }
        Value::Object(obj) => {
            out.push(b'{');
            for (i, member) in obj.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_string(out, &member.key);
                out.push(b':');
                write_value(out, &member.value);
            }
            out.push(b'}');
        }
    }
}

fn write_number(out: &mut ByteScratch, n: f64) {
    debug_assert!(n.is_finite(), "Value::Number must never hold NaN/infinity");
    let mut buf = ryu::Buffer::new();
    out.extend_from_slice(buf.format_finite(n).as_bytes());
}

/// Emits a JSON string literal for `s`, escaping per §4.9: `"` `\` `\b` `\f`
/// `\n` `\r` `\t` get their two-byte escapes, bytes `< 0x20` become
/// `\u00XX` with uppercase hex, everything else (including non-ASCII UTF-8)
/// is copied verbatim.
fn write_string(out: &mut ByteScratch, s: &str) {
    // Worst case is every byte expanding to a `\u00XX` escape (6 bytes),
    // plus the two surrounding quotes, matching `lept_stringify_string`'s
    // `len * 6 + 2` pre-reservation, trimmed back down to what was used.
    out.reserve(s.len() * 6 + 2);
    out.push(b'"');
    for &byte in s.as_bytes() {
        match byte {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b if b < 0x20 => {
                let escape: [u8; 6] =
                    [b'\\', b'u', b'0', b'0', HEX_DIGITS[(b >> 4) as usize], HEX_DIGITS[(b & 0xF) as usize]];
                out.extend_from_slice(&escape);
            }
            b => out.push(b),
        }
    }
    out.push(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;

    #[test]
    fn escapes_control_and_quote_bytes() {
        let mut v = Value::Null;
        v.set_string("a\"b\\c\u{0}d\n");
        assert_eq!(to_string(&v), "\"a\\\"b\\\\c\\u0000d\\n\"");
    }

    #[test]
    fn non_ascii_copied_verbatim() {
        let mut v = Value::Null;
        v.set_string("caf\u{e9}");
        assert_eq!(to_string(&v), "\"caf\u{e9}\"");
    }

    #[test]
    fn object_preserves_insertion_order() {
        let mut obj = Object::new();
        *obj.set_value("b") = Value::from(2.0);
        *obj.set_value("a") = Value::from(1.0);
        assert_eq!(to_string(&Value::Object(obj)), r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn number_round_trips_without_trailing_zeros() {
        let v = Value::from(123.0);
        assert_eq!(to_string(&v), "123.0");
    }
}
