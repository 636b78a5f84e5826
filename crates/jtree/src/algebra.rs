//! Value algebra: copy, move, and swap (§4.10).
//!
//! Equality is not reimplemented here: it is `Value`'s derived
//! `PartialEq`, backed by [`crate::object::Object`]'s hand-written
//! order-insensitive `PartialEq` (see that module). The operations below
//! are thin, named wrappers around what `leptjson.c` hand-rolls
//! (`lept_copy`/`lept_move`/`lept_swap`), expressed through `Clone`,
//! `core::mem::take`, and `core::mem::swap`.

use crate::value::Value;

/// Deep-copies `src` into `dst`, dropping `dst`'s prior payload.
///
/// The C original walks the tree by hand (`lept_copy`) because `lept_value`
/// has no notion of ownership-aware cloning. In Rust, `Value: Clone` already
/// performs exactly that recursive, owning copy, so this is `*dst =
/// src.clone()`. `dst` and `src` may be the same value (a no-op, unlike the
/// C original's `assert(src != dst)` precondition) since cloning a value
/// into itself cannot violate aliasing.
pub fn copy(dst: &mut Value, src: &Value) {
    *dst = src.clone();
}

/// Moves `src` into `dst`, leaving `src` as [`Value::Null`].
///
/// `dst`'s prior payload is dropped. Unlike the C original, `dst` and `src`
/// cannot alias the same storage in safe Rust (they are distinct `&mut`
/// borrows), so there is no precondition to document beyond the borrow
/// checker's own.
pub fn move_value(dst: &mut Value, src: &mut Value) {
    *dst = core::mem::take(src);
}

/// Swaps the payloads of `lhs` and `rhs`.
///
/// `core::mem::swap` is already a no-op when `lhs` and `rhs` happen to
/// borrow the same location (which safe Rust cannot express for two
/// simultaneous `&mut` borrows in the first place).
pub fn swap(lhs: &mut Value, rhs: &mut Value) {
    core::mem::swap(lhs, rhs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn copy_then_free_src_does_not_invalidate_dst() {
        let src = parse(r#"{"a":[1,2,3]}"#).unwrap();
        let mut dst = Value::Null;
        copy(&mut dst, &src);
        assert_eq!(dst, src);
        drop(src);
        assert_eq!(dst.get("a").unwrap().get_array_size(), 3);
    }

    #[test]
    fn move_leaves_src_null() {
        let mut src = parse("[1,2,3]").unwrap();
        let expected = src.clone();
        let mut dst = Value::Bool(true);
        move_value(&mut dst, &mut src);
        assert!(src.is_null());
        assert_eq!(dst, expected);
    }

    #[test]
    fn swap_exchanges_payloads() {
        let mut a = Value::from(1.0);
        let mut b = Value::from("x");
        swap(&mut a, &mut b);
        assert_eq!(a, Value::from("x"));
        assert_eq!(b, Value::from(1.0));
    }
}
