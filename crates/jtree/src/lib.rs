//! A JSON ([RFC 8259]) document-tree library.
//!
//! `jtree` parses a complete JSON text into an owned [`Value`] tree,
//! serializes a tree back to JSON text, and exposes a value-access API to
//! mutate, compare, copy, move, and swap trees.
//!
//! This crate parses a whole JSON text in one call; there is no
//! streaming/incremental mode. See [`parse`] and [`Value::to_json_string`].
//!
//! ```
//! use jtree::{parse, Value};
//!
//! let v = parse(r#"{"a":1,"b":[true,null,"x"]}"#).unwrap();
//! assert_eq!(v.get("a").and_then(Value::as_f64), Some(1.0));
//! assert_eq!(v.to_json_string(), r#"{"a":1.0,"b":[true,null,"x"]}"#);
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod algebra;
mod buffer;
mod error;
mod object;
mod parser;
mod serialize;
mod value;

pub use algebra::{copy, move_value, swap};
pub use error::ParseError;
pub use object::{Member, Object};
pub use value::{Array, Type, Value};

/// Sentinel returned by [`Object::find_index`] when a key is absent.
///
/// Mirrors `leptjson.c`'s `LEPT_KEY_NOT_EXIST` / `SIZE_MAX` sentinel, kept
/// here for parity with the documented external interface rather than out of
/// necessity. Idiomatic Rust callers should prefer [`Object::find_value`],
/// which returns an `Option`.
pub const NOT_FOUND: usize = usize::MAX;

/// Parses a complete JSON text into a [`Value`] tree.
///
/// The entire input must be consumed: trailing non-whitespace bytes after a
/// valid value produce [`ParseError::RootNotSingular`]. An input containing
/// only whitespace (or nothing at all) produces [`ParseError::ExpectValue`].
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parser::parse(input)
}
