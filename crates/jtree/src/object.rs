//! The JSON object: an ordered, duplicate-key-preserving list of members.
//!
//! Grounded on `leptjson.c`'s `lept_member`/`u.o` object representation (a
//! contiguous buffer of key/value pairs with linear, first-match lookup),
//! reimplemented over `Vec<Member>` instead of a raw `realloc`-managed
//! buffer. A dedicated `Vec` (rather than a keyed map) is required because
//! this crate's object preserves insertion order, tolerates duplicate keys,
//! and exposes index-based accessors (`key(index)`, `value(index)`,
//! `remove_at(index)`), none of which a keyed map can express. See
//! `DESIGN.md`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::value::Value;

/// A single key/value pair inside an [`Object`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Member {
    /// The member's key.
    pub key: String,
    /// The member's value.
    pub value: Value,
}

/// A JSON object: an ordered sequence of [`Member`]s.
///
/// Duplicate keys are not deduplicated on parse (§3 invariant: "An Object's
/// first occurrence of a key wins for lookup; duplicate keys are not
/// deduplicated on parse"). [`Object::set_value`] on an existing key mutates
/// the first match in place rather than appending.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Object {
    members: Vec<Member>,
}

/// Object equality is order-insensitive (§4.10): same size, and for each
/// member of `self` a member of the same key is found (by first match) in
/// `other` with a structurally equal value. This intentionally differs from
/// a derived, order-sensitive `Vec<Member>` comparison.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.members.len() != other.members.len() {
            return false;
        }
        self.members
            .iter()
            .all(|m| other.find_value(&m.key).is_some_and(|v| *v == m.value))
    }
}

impl Object {
    /// Creates an empty object with no allocated storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Creates an empty object with storage reserved for `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Current storage capacity, in members.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    /// Reserves storage for at least `additional` more members.
    pub fn reserve(&mut self, additional: usize) {
        self.members.reserve(additional);
    }

    /// Shrinks storage to fit exactly `len()` members.
    pub fn shrink_to_fit(&mut self) {
        self.members.shrink_to_fit();
    }

    /// All members, in insertion order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The key at `index`.
    ///
    /// Panics if `index >= len()`, per §4.8's documented precondition.
    #[must_use]
    pub fn key(&self, index: usize) -> &str {
        &self.members[index].key
    }

    /// The value at `index`.
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn value(&self, index: usize) -> &Value {
        &self.members[index].value
    }

    /// A mutable reference to the value at `index`.
    ///
    /// Panics if `index >= len()`.
    pub fn value_mut(&mut self, index: usize) -> &mut Value {
        &mut self.members[index].value
    }

    /// Linear search for `key`, returning the index of its first occurrence.
    ///
    /// Returns [`crate::NOT_FOUND`] if absent.
    #[must_use]
    pub fn find_index(&self, key: &str) -> usize {
        self.members
            .iter()
            .position(|m| m.key == key)
            .unwrap_or(crate::NOT_FOUND)
    }

    /// Finds the value for the first member matching `key`.
    #[must_use]
    pub fn find_value(&self, key: &str) -> Option<&Value> {
        self.members.iter().find(|m| m.key == key).map(|m| &m.value)
    }

    /// Finds a mutable reference to the value for the first member matching
    /// `key`.
    pub fn find_value_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.members
            .iter_mut()
            .find(|m| m.key == key)
            .map(|m| &mut m.value)
    }

    /// Returns a reference to the existing value for `key`, or inserts a new
    /// member with a [`Value::Null`] value and returns a reference to it.
    ///
    /// Applying this twice with the same key mutates the existing slot and
    /// does not grow `len()` the second time (§8 testable property).
    pub fn set_value(&mut self, key: &str) -> &mut Value {
        if let Some(index) = self.members.iter().position(|m| m.key == key) {
            return &mut self.members[index].value;
        }
        self.members.push(Member {
            key: key.into(),
            value: Value::Null,
        });
        let last = self.members.len() - 1;
        &mut self.members[last].value
    }

    /// Removes the member at `index`, shifting the tail left.
    ///
    /// Panics if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) {
        self.members.remove(index);
    }

    /// Removes the first member matching `key`, if any.
    pub fn remove_by_key(&mut self, key: &str) {
        if let Some(index) = self.members.iter().position(|m| m.key == key) {
            self.remove_at(index);
        }
    }

    /// Removes all members without shrinking storage.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Pushes an already-constructed member, preserving duplicates as-is.
    ///
    /// Used by the object parser (§4.6), which must not go through
    /// [`Object::set_value`]'s first-match-wins merge: parsing never
    /// deduplicates.
    pub(crate) fn push_raw(&mut self, member: Member) {
        self.members.push(member);
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = core::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl FromIterator<Member> for Object {
    fn from_iter<T: IntoIterator<Item = Member>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
