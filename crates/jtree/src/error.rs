//! Parse error types.
//!
//! Mirrors leptjson's flat error-code enumeration (`LEPT_PARSE_*`),
//! expressed as a `thiserror`-derived enum with one `#[error("...")]`
//! message per variant.

use thiserror::Error;

/// An error produced while [`parse`](crate::parse)-ing a JSON text.
///
/// Each variant corresponds to exactly one error code in the external
/// interface's stable taxonomy. The `position` carried on most variants is
/// the byte offset into the input at which the error was detected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained nothing but whitespace (or was empty).
    #[error("expected a value")]
    ExpectValue,

    /// The first non-whitespace byte at `position` does not begin any valid
    /// JSON value, or a `true`/`false`/`null` literal was malformed.
    #[error("invalid value at byte {position}")]
    InvalidValue {
        /// Byte offset of the invalid token.
        position: usize,
    },

    /// A value parsed successfully but non-whitespace bytes remained.
    #[error("trailing characters after value at byte {position}")]
    RootNotSingular {
        /// Byte offset of the first trailing character.
        position: usize,
    },

    /// A number's matched span converted to an infinite `f64`.
    #[error("number too big at byte {position}")]
    NumberTooBig {
        /// Byte offset where the number began.
        position: usize,
    },

    /// A string was not closed with a `"` before the input ended.
    #[error("missing closing quotation mark at byte {position}")]
    MissQuotationMark {
        /// Byte offset of the opening quote.
        position: usize,
    },

    /// A `\` escape was followed by a byte that is not a recognized escape.
    #[error("invalid string escape at byte {position}")]
    InvalidStringEscape {
        /// Byte offset of the backslash.
        position: usize,
    },

    /// An unescaped control byte (`< 0x20`) appeared inside a string.
    #[error("invalid (unescaped control) character at byte {position}")]
    InvalidStringChar {
        /// Byte offset of the offending byte.
        position: usize,
    },

    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid unicode hex digits at byte {position}")]
    InvalidUnicodeHex {
        /// Byte offset of the `\u`.
        position: usize,
    },

    /// A high surrogate was not followed by a valid low surrogate, or a bare
    /// low surrogate appeared outside a surrogate pair.
    #[error("invalid unicode surrogate pair at byte {position}")]
    InvalidUnicodeSurrogate {
        /// Byte offset of the offending `\u` escape.
        position: usize,
    },

    /// An array element was not followed by `,` or `]`.
    #[error("missing comma or ']' at byte {position}")]
    MissCommaOrSquareBracket {
        /// Byte offset of the unexpected byte.
        position: usize,
    },

    /// An object member did not begin with a `"` key.
    #[error("missing key at byte {position}")]
    MissKey {
        /// Byte offset of the unexpected byte.
        position: usize,
    },

    /// An object key was not followed by `:`.
    #[error("missing colon at byte {position}")]
    MissColon {
        /// Byte offset of the unexpected byte.
        position: usize,
    },

    /// An object member was not followed by `,` or `}`.
    #[error("missing comma or '}}' at byte {position}")]
    MissCommaOrCurlyBracket {
        /// Byte offset of the unexpected byte.
        position: usize,
    },
}

impl ParseError {
    /// The byte offset at which the error was detected, when applicable.
    ///
    /// [`ParseError::ExpectValue`] carries no position since it only ever
    /// fires on an empty (or all-whitespace) input.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match *self {
            Self::ExpectValue => None,
            Self::InvalidValue { position }
            | Self::RootNotSingular { position }
            | Self::NumberTooBig { position }
            | Self::MissQuotationMark { position }
            | Self::InvalidStringEscape { position }
            | Self::InvalidStringChar { position }
            | Self::InvalidUnicodeHex { position }
            | Self::InvalidUnicodeSurrogate { position }
            | Self::MissCommaOrSquareBracket { position }
            | Self::MissKey { position }
            | Self::MissColon { position }
            | Self::MissCommaOrCurlyBracket { position } => Some(position),
        }
    }
}
