//! The number sub-parser (§4.3).

use crate::error::ParseError;
use crate::parser::Parser;
use crate::value::Value;

impl<'a> Parser<'a> {
    /// Parses a number at the current position.
    ///
    /// Grammar: optional `-`; integer part is `0` alone or a nonzero digit
    /// followed by digits (leading-zero runs like `0123` are rejected by
    /// this grammar check, not deferred to a later pass); optional `.`
    /// fraction with at least one digit; optional `e`/`E` exponent, optional
    /// sign, at least one digit. The matched span is converted with the
    /// `lexical` crate; an infinite result (matching the host's `HUGE_VAL`
    /// check) is reported as [`ParseError::NumberTooBig`].
    pub(crate) fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(ParseError::InvalidValue { position: start }),
        }

        if self.peek() == Some(b'.') {
            self.pos += 1;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue { position: start });
            }
            self.skip_digits();
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue { position: start });
            }
            self.skip_digits();
        }

        let span = core::str::from_utf8(&self.input[start..self.pos])
            .expect("number span is pure ASCII by construction");
        let number: f64 =
            lexical::parse(span).map_err(|_| ParseError::InvalidValue { position: start })?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig { position: start });
        }
        Ok(Value::from(number))
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse("0").unwrap(), crate::Value::from(0.0));
    }

    #[test]
    fn parses_negative_fraction_and_exponent() {
        assert_eq!(parse("-1.5e2").unwrap(), crate::Value::from(-150.0));
    }

    #[test]
    fn rejects_leading_zero_run() {
        assert!(parse("0123").is_err());
    }

    #[test]
    fn rejects_bare_minus() {
        assert!(parse("-").is_err());
    }

    #[test]
    fn rejects_dangling_dot() {
        assert!(parse("1.").is_err());
    }

    #[test]
    fn rejects_dangling_exponent() {
        assert!(parse("1e").is_err());
    }

    #[test]
    fn huge_exponent_is_number_too_big() {
        let err = parse("1e309").unwrap_err();
        assert!(matches!(err, crate::ParseError::NumberTooBig { .. }));
    }
}
