//! The string sub-parser (§4.4).
//!
//! Precondition: the cursor sits on the opening `"`. Decoded bytes are
//! staged in a [`ByteScratch`] and copied into an owned `String` once the
//! closing quote is found; every error path resets the scratch to empty
//! before returning, matching "on any error the scratch buffer's `top` is
//! reset to zero".

use alloc::string::String;

use crate::buffer::ByteScratch;
use crate::error::ParseError;
use crate::parser::lexical::encode_utf8;
use crate::parser::unicode::HexAccumulator;
use crate::parser::Parser;
use crate::value::Value;

impl<'a> Parser<'a> {
    /// Parses a string at the current position and wraps it as a
    /// [`Value::String`].
    pub(crate) fn parse_string_value(&mut self) -> Result<Value, ParseError> {
        self.parse_raw_string().map(Value::from)
    }

    /// Parses a string at the current position, returning the decoded
    /// `String` directly. Used both for string values and for object keys
    /// (§4.6 step 2, "the raw-string sub-parser").
    pub(crate) fn parse_raw_string(&mut self) -> Result<String, ParseError> {
        let quote_pos = self.pos;
        debug_assert_eq!(self.input.get(quote_pos), Some(&b'"'));
        self.pos += 1;

        let mut scratch = ByteScratch::new();
        loop {
            match self.input.get(self.pos).copied() {
                None => {
                    scratch.reset();
                    return Err(ParseError::MissQuotationMark {
                        position: quote_pos,
                    });
                }
                Some(b'"') => {
                    self.pos += 1;
                    let bytes = scratch.pop(scratch.len());
                    return Ok(
                        String::from_utf8(bytes).expect("only ever stages valid UTF-8")
                    );
                }
                Some(b'\\') => {
                    let escape_pos = self.pos;
                    self.pos += 1;
                    if let Err(err) = self.parse_escape(escape_pos, &mut scratch) {
                        scratch.reset();
                        return Err(err);
                    }
                }
                Some(byte) if byte < 0x20 => {
                    scratch.reset();
                    return Err(ParseError::InvalidStringChar {
                        position: self.pos,
                    });
                }
                Some(byte) => {
                    scratch.push(byte);
                    self.pos += 1;
                }
            }
        }
    }

    /// Decodes one `\X` escape (cursor positioned just past the backslash)
    /// and stages its bytes.
    fn parse_escape(&mut self, escape_pos: usize, scratch: &mut ByteScratch) -> Result<(), ParseError> {
        match self.input.get(self.pos).copied() {
            Some(b'"') => {
                scratch.push(b'"');
                self.pos += 1;
            }
            Some(b'\\') => {
                scratch.push(b'\\');
                self.pos += 1;
            }
            Some(b'/') => {
                scratch.push(b'/');
                self.pos += 1;
            }
            Some(b'b') => {
                scratch.push(0x08);
                self.pos += 1;
            }
            Some(b'f') => {
                scratch.push(0x0C);
                self.pos += 1;
            }
            Some(b'n') => {
                scratch.push(b'\n');
                self.pos += 1;
            }
            Some(b'r') => {
                scratch.push(b'\r');
                self.pos += 1;
            }
            Some(b't') => {
                scratch.push(b'\t');
                self.pos += 1;
            }
            Some(b'u') => {
                self.pos += 1;
                let code_point = self.parse_unicode_escape(escape_pos)?;
                encode_utf8(scratch, code_point);
            }
            _ => {
                return Err(ParseError::InvalidStringEscape {
                    position: escape_pos,
                });
            }
        }
        Ok(())
    }

    /// Decodes a `\uXXXX` escape, following a high surrogate with a second
    /// `\uYYYY` low-surrogate escape when required, and returns the final
    /// code point.
    fn parse_unicode_escape(&mut self, escape_pos: usize) -> Result<u32, ParseError> {
        let unit = self.read_hex4(escape_pos)?;

        if (0xD800..=0xDBFF).contains(&unit) {
            if self.input.get(self.pos).copied() != Some(b'\\')
                || self.input.get(self.pos + 1).copied() != Some(b'u')
            {
                return Err(ParseError::InvalidUnicodeSurrogate {
                    position: escape_pos,
                });
            }
            self.pos += 2;
            let low = self.read_hex4(escape_pos)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ParseError::InvalidUnicodeSurrogate {
                    position: escape_pos,
                });
            }
            Ok(0x10000 + (unit - 0xD800) * 0x400 + (low - 0xDC00))
        } else if (0xDC00..=0xDFFF).contains(&unit) {
            // A bare low surrogate, not reached via a preceding high
            // surrogate, is rejected here per §4.4's note on §9.
            Err(ParseError::InvalidUnicodeSurrogate {
                position: escape_pos,
            })
        } else {
            Ok(unit)
        }
    }

    /// Reads four hex digits starting at the current position, advancing
    /// past them.
    fn read_hex4(&mut self, escape_pos: usize) -> Result<u32, ParseError> {
        let mut accumulator = HexAccumulator::new();
        for _ in 0..4 {
            let byte = self
                .input
                .get(self.pos)
                .copied()
                .ok_or(ParseError::InvalidUnicodeHex {
                    position: escape_pos,
                })?;
            match accumulator.feed(byte) {
                Ok(Some(code)) => {
                    self.pos += 1;
                    return Ok(code);
                }
                Ok(None) => self.pos += 1,
                Err(()) => {
                    return Err(ParseError::InvalidUnicodeHex {
                        position: escape_pos,
                    });
                }
            }
        }
        unreachable!("HexAccumulator::feed always returns Some on the fourth digit")
    }
}
