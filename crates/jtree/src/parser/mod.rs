//! The recursive-descent value parser (§4.5–§4.7, §4.11).
//!
//! `Parser` walks a `&str` input byte-by-byte (every structural JSON byte is
//! ASCII, so byte-offset indexing never splits a multi-byte UTF-8 sequence
//! except inside already-verbatim string content, which is copied whole).
//! There is no explicit state-machine type for `Start`/`Value`/`End` (§4.11):
//! those three states are just the three statements of [`parse`] in
//! sequence; an error return from any of them is terminal, and whatever
//! scratch storage a sub-parser staged is freed by ordinary `Drop` on the
//! way out.

mod lexical;
mod number;
mod string;
mod unicode;

use alloc::vec::Vec;

use crate::error::ParseError;
use crate::object::{Member, Object};
use crate::value::Value;
use lexical::{match_literal, skip_whitespace};

/// Parses a complete JSON text into a [`Value`] tree.
///
/// Mirrors §4.7's six steps: skip leading whitespace, parse one value, skip
/// trailing whitespace, require end-of-input (else [`ParseError::
/// RootNotSingular`]), with an all-whitespace-or-empty input reported as
/// [`ParseError::ExpectValue`] before a value is even attempted.
pub(crate) fn parse(input: &str) -> Result<Value, ParseError> {
    let bytes = input.as_bytes();
    let mut parser = Parser {
        input: bytes,
        pos: 0,
    };

    skip_whitespace(parser.input, &mut parser.pos);
    if parser.pos == bytes.len() {
        return Err(ParseError::ExpectValue);
    }

    let value = parser.parse_value()?;

    skip_whitespace(parser.input, &mut parser.pos);
    if parser.pos != bytes.len() {
        return Err(ParseError::RootNotSingular {
            position: parser.pos,
        });
    }

    Ok(value)
}

/// Parser state: the input bytes and the current cursor position.
pub(crate) struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Dispatches on the first byte (§4.2/§4.5/§4.6's entry points, §4.3's
    /// number grammar) to parse one value.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'"') => self.parse_string_value(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            _ => Err(ParseError::InvalidValue {
                position: self.pos,
            }),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        let start = self.pos;
        if match_literal(self.input, &mut self.pos, literal) {
            Ok(value)
        } else {
            Err(ParseError::InvalidValue { position: start })
        }
    }

    /// Parses an array (§4.5). An immediate `]` after whitespace yields an
    /// empty array with no allocated storage. Elements are staged in a
    /// local `Vec`, which `Drop`s (freeing every already-parsed element) if
    /// a later element fails, satisfying "any failure during element
    /// parsing must pop and destroy every already-staged element" without
    /// hand-rolled rollback code.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.pos += 1; // past '['
        skip_whitespace(self.input, &mut self.pos);
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(Vec::new()));
        }

        let mut elements = Vec::new();
        loop {
            elements.push(self.parse_value()?);
            skip_whitespace(self.input, &mut self.pos);
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    skip_whitespace(self.input, &mut self.pos);
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(elements));
                }
                _ => {
                    return Err(ParseError::MissCommaOrSquareBracket {
                        position: self.pos,
                    });
                }
            }
        }
    }

    /// Parses an object (§4.6). An immediate `}` after whitespace yields an
    /// empty object. Members are staged in a local `Vec<Member>` (freed by
    /// `Drop` on early failure, same rationale as [`Self::parse_array`])
    /// and pushed via [`Object::push_raw`] so duplicate keys are preserved
    /// as-is rather than merged.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.pos += 1; // past '{'
        skip_whitespace(self.input, &mut self.pos);
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(Object::new()));
        }

        let mut members = Vec::new();
        loop {
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey {
                    position: self.pos,
                });
            }
            let key = self.parse_raw_string()?;

            skip_whitespace(self.input, &mut self.pos);
            if self.peek() != Some(b':') {
                return Err(ParseError::MissColon {
                    position: self.pos,
                });
            }
            self.pos += 1;
            skip_whitespace(self.input, &mut self.pos);

            let value = self.parse_value()?;
            members.push(Member { key, value });

            skip_whitespace(self.input, &mut self.pos);
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    skip_whitespace(self.input, &mut self.pos);
                }
                Some(b'}') => {
                    self.pos += 1;
                    let mut object = Object::with_capacity(members.len());
                    for member in members {
                        object.push_raw(member);
                    }
                    return Ok(Value::Object(object));
                }
                _ => {
                    return Err(ParseError::MissCommaOrCurlyBracket {
                        position: self.pos,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::{Object, ParseError, Value};

    #[test]
    fn parses_literals() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn empty_input_is_expect_value() {
        assert!(matches!(parse(""), Err(ParseError::ExpectValue)));
        assert!(matches!(parse("   "), Err(ParseError::ExpectValue)));
    }

    #[test]
    fn trailing_garbage_is_root_not_singular() {
        let err = parse("null x").unwrap_err();
        assert!(matches!(err, ParseError::RootNotSingular { .. }));
    }

    #[test]
    fn malformed_literal_is_invalid_value() {
        let err = parse("nul").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }));
    }

    #[test]
    fn parses_empty_array() {
        let v = parse("[]").unwrap();
        assert_eq!(v, Value::Array(alloc::vec::Vec::new()));
    }

    #[test]
    fn parses_nested_mixed_array() {
        let v = parse(r#"[1, "two", [true, null], {"k": false}]"#).unwrap();
        let Value::Array(items) = v else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], Value::from(1.0));
        assert_eq!(items[1], Value::from("two"));
    }

    #[test]
    fn array_missing_comma_is_reported() {
        let err = parse("[1 2]").unwrap_err();
        assert!(matches!(err, ParseError::MissCommaOrSquareBracket { .. }));
    }

    #[test]
    fn parses_empty_object() {
        let v = parse("{}").unwrap();
        assert_eq!(v, Value::Object(Object::new()));
    }

    #[test]
    fn parses_object_preserving_duplicate_keys() {
        let v = parse(r#"{"a":1,"a":2}"#).unwrap();
        let Value::Object(obj) = v else {
            panic!("expected object");
        };
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.find_value("a"), Some(&Value::from(1.0)));
    }

    #[test]
    fn object_missing_key_is_reported() {
        let err = parse("{1:2}").unwrap_err();
        assert!(matches!(err, ParseError::MissKey { .. }));
    }

    #[test]
    fn object_missing_colon_is_reported() {
        let err = parse(r#"{"a" 1}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissColon { .. }));
    }

    #[test]
    fn object_missing_comma_is_reported() {
        let err = parse(r#"{"a":1 "b":2}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissCommaOrCurlyBracket { .. }));
    }

    #[test]
    fn invalid_element_does_not_produce_partial_array() {
        // The whole expression fails; there is no way to observe a
        // partially built array since `parse` only ever returns a
        // complete `Value` or an `Err`.
        let err = parse("[1,2,invalid]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }));
    }

    #[test]
    fn deeply_nested_array_parses() {
        let input = alloc::format!("{}{}", "[".repeat(64), "]".repeat(64));
        let v = parse(&input).unwrap();
        let Value::Array(items) = v else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 1);
    }
}
