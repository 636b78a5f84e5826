//! The scratch buffer: a byte-granular LIFO arena.
//!
//! Used by the string sub-parser ([`crate::parser::string`]) to stage
//! decoded bytes before they are copied into an owned `String`, and by the
//! serializer ([`crate::serialize`]) as its output accumulator.
//!
//! A contiguous growable store with push and bulk-copy operations, built as
//! a plain LIFO rather than a ring sized for incremental re-feeding of
//! unread input: it only ever grows at the top and only ever pops from the
//! top, matching leptjson's `lept_context_push`/`lept_context_push_len`/
//! `lept_context_pop` discipline (push-and-grow-by-1.5x, pop-first-`n`).

use alloc::vec::Vec;

/// A contiguous, growable byte arena with a push/pop discipline.
#[derive(Debug, Default)]
pub(crate) struct ByteScratch {
    data: Vec<u8>,
}

impl ByteScratch {
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of bytes currently staged (the "top" of the stack).
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Reserves room for `additional` more bytes, growing capacity by 1.5×
    /// (matching `lept_context_push_len`'s `size += size >> 1` growth) until
    /// it holds `len() + additional`.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let needed = self.data.len() + additional;
        if self.data.capacity() < needed {
            let mut new_cap = self.data.capacity().max(4);
            while new_cap < needed {
                new_cap += (new_cap >> 1).max(1);
            }
            self.data.reserve(new_cap - self.data.len());
        }
    }

    /// Pushes a single byte, growing as needed.
    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        self.reserve(1);
        self.data.push(byte);
    }

    /// Appends a byte slice, growing as needed.
    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    /// Pops the last `n` bytes and returns them in original (push) order.
    ///
    /// Panics if fewer than `n` bytes are staged; this mirrors the C
    /// original's `assert(c->top >= len)` precondition.
    pub(crate) fn pop(&mut self, n: usize) -> Vec<u8> {
        assert!(self.data.len() >= n, "scratch underflow");
        self.data.split_off(self.data.len() - n)
    }

    /// Discards all staged bytes without returning them, resetting `top` to
    /// zero. Used on the string sub-parser's error paths (§4.4: "On any
    /// error the scratch buffer's `top` is reset to zero").
    pub(crate) fn reset(&mut self) {
        self.data.clear();
    }
}
