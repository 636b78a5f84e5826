//! Four-hex-digit `\u` escape accumulator (§4.4 "Unicode handling").
//!
//! Accumulates nibbles into a `u32`, four digits at a time, but stops one
//! step short of converting to `char`: it hands back the raw `u32` code unit
//! instead. A lone high or low surrogate half (`0xD800..=0xDFFF`) is not a
//! valid `char`, so the string sub-parser must see both halves of a
//! surrogate pair, or reject a bare one, before `char::from_u32` is ever
//! called.
#[derive(Debug, Default)]
pub(crate) struct HexAccumulator {
    acc: u32,
    len: u8,
}

impl HexAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn hex_val(byte: u8) -> Option<u32> {
        match byte {
            b'0'..=b'9' => Some(u32::from(byte - b'0')),
            b'a'..=b'f' => Some(u32::from(byte - b'a') + 10),
            b'A'..=b'F' => Some(u32::from(byte - b'A') + 10),
            _ => None,
        }
    }

    /// Feeds one byte, expected to be an ASCII hex digit.
    ///
    /// Returns `Ok(Some(code_unit))` once four digits have been fed (and
    /// resets for the next escape), `Ok(None)` while fewer than four have
    /// landed, `Err(())` if `byte` is not a hex digit.
    pub(crate) fn feed(&mut self, byte: u8) -> Result<Option<u32>, ()> {
        let digit = Self::hex_val(byte).ok_or(())?;
        self.acc = (self.acc << 4) | digit;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }
        let code = self.acc;
        self.acc = 0;
        self.len = 0;
        Ok(Some(code))
    }
}
