//! The [`Value`] tree and its typed accessors/mutators (§4.8).
//!
//! The enum shape, `From` impls and `Display` delegation follow this
//! ecosystem's usual tagged-union layout; the exact set of accessor and
//! mutator operations (`lept_get_*`, `lept_set_*`, `lept_*_array_*`,
//! `lept_*_object_*`) comes from `leptjson.c`/`leptjson.h`.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::object::Object;

/// A JSON array: an ordered, contiguous sequence of [`Value`]s.
///
/// `Vec<Value>` already tracks `len`/`capacity` and amortizes growth, so the
/// capacity-mutating operations of §4.8 (`set_array`, `reserve`,
/// `shrink_to_size`) are expressed directly through `Vec`'s own API.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Value {
    /// The JSON `null` literal.
    Null,
    /// A JSON boolean (`true` or `false`).
    Bool(bool),
    /// A JSON number, stored as the nearest `f64`.
    Number(f64),
    /// A JSON string.
    String(String),
    /// A JSON array.
    Array(Array),
    /// A JSON object.
    Object(Object),
}

impl Default for Value {
    /// A fresh `Value` is born `Null` (§3: "A Value is born in the `Null`
    /// state").
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

/// The tag of a [`Value`] (mirrors `lept_type` / `lept_get_type`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Type {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::Number`].
    Number,
    /// [`Value::String`].
    String,
    /// [`Value::Array`].
    Array,
    /// [`Value::Object`].
    Object,
}

impl Value {
    // -- type ---------------------------------------------------------

    /// The value's type tag.
    #[must_use]
    pub fn get_type(&self) -> Type {
        match self {
            Self::Null => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::Number(_) => Type::Number,
            Self::String(_) => Type::String,
            Self::Array(_) => Type::Array,
            Self::Object(_) => Type::Object,
        }
    }

    /// Resets this value to [`Value::Null`], dropping any owned payload.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Returns `true` if this value is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    // -- boolean --------------------------------------------------------

    /// Returns the boolean payload.
    ///
    /// Panics if this value is not [`Value::Bool`] (§4.12: accessor
    /// preconditions are design-time contracts).
    #[must_use]
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            _ => panic!("as_bool called on a non-boolean value"),
        }
    }

    /// Replaces this value with a boolean, dropping any prior payload.
    pub fn set_bool(&mut self, b: bool) {
        *self = Self::Bool(b);
    }

    // -- number -----------------------------------------------------------

    /// Returns the numeric payload.
    ///
    /// Panics if this value is not [`Value::Number`].
    #[must_use]
    pub fn get_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            _ => panic!("get_number called on a non-number value"),
        }
    }

    /// Returns the numeric payload, or `None` if this is not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Replaces this value with a number, dropping any prior payload.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    // -- string -------------------------------------------------------------

    /// Returns the string payload.
    ///
    /// Panics if this value is not [`Value::String`].
    #[must_use]
    pub fn get_string(&self) -> &str {
        match self {
            Self::String(s) => s,
            _ => panic!("get_string called on a non-string value"),
        }
    }

    /// Returns the string payload, or `None` if this is not a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string payload's byte length.
    ///
    /// Panics if this value is not [`Value::String`].
    #[must_use]
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// Replaces this value with a string copied from `s`, dropping any
    /// prior payload.
    pub fn set_string(&mut self, s: &str) {
        *self = Self::String(s.into());
    }

    // -- array (read) ---------------------------------------------------

    /// Returns the array payload's length.
    ///
    /// Panics if this value is not [`Value::Array`].
    #[must_use]
    pub fn get_array_size(&self) -> usize {
        self.as_array().expect("get_array_size called on a non-array value").len()
    }

    /// Returns the array payload's storage capacity.
    ///
    /// Panics if this value is not [`Value::Array`].
    #[must_use]
    pub fn get_array_capacity(&self) -> usize {
        self.as_array()
            .expect("get_array_capacity called on a non-array value")
            .capacity()
    }

    /// Returns the element at `index`.
    ///
    /// Panics if this value is not [`Value::Array`] or if `index >=
    /// get_array_size()`.
    #[must_use]
    pub fn get_array_element(&self, index: usize) -> &Value {
        &self.as_array().expect("get_array_element called on a non-array value")[index]
    }

    /// Borrows the array payload, or `None` if this is not an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutably borrows the array payload, or `None` if this is not an array.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    // -- array (mutate) --------------------------------------------------

    /// Replaces this value with an empty array with storage reserved for
    /// `capacity` elements.
    pub fn set_array(&mut self, capacity: usize) {
        *self = Self::Array(Array::with_capacity(capacity));
    }

    /// Reserves storage for at least `additional` more elements.
    ///
    /// Panics if this value is not [`Value::Array`].
    pub fn reserve_array(&mut self, additional: usize) {
        self.as_array_mut()
            .expect("reserve_array called on a non-array value")
            .reserve(additional);
    }

    /// Shrinks storage to fit exactly the current size.
    ///
    /// Panics if this value is not [`Value::Array`].
    pub fn shrink_array(&mut self) {
        self.as_array_mut()
            .expect("shrink_array called on a non-array value")
            .shrink_to_fit();
    }

    /// Pushes a [`Value::Null`] element and returns a reference to it.
    ///
    /// Panics if this value is not [`Value::Array`].
    pub fn push_back_array_element(&mut self) -> &mut Value {
        let arr = self
            .as_array_mut()
            .expect("push_back_array_element called on a non-array value");
        arr.push(Value::Null);
        arr.last_mut().expect("just pushed")
    }

    /// Removes and drops the last element.
    ///
    /// Panics if this value is not [`Value::Array`] or the array is empty.
    pub fn pop_back_array_element(&mut self) {
        let arr = self
            .as_array_mut()
            .expect("pop_back_array_element called on a non-array value");
        assert!(!arr.is_empty(), "pop_back_array_element on an empty array");
        arr.pop();
    }

    /// Inserts a [`Value::Null`] element at `index`, shifting the tail
    /// right, and returns a reference to it.
    ///
    /// Panics if this value is not [`Value::Array`] or `index >
    /// get_array_size()`.
    pub fn insert_array_element(&mut self, index: usize) -> &mut Value {
        let arr = self
            .as_array_mut()
            .expect("insert_array_element called on a non-array value");
        arr.insert(index, Value::Null);
        &mut arr[index]
    }

    /// Removes `count` elements starting at `index` (fewer if the array is
    /// shorter), freeing each, and shifts the tail left. A no-op if `index
    /// >= get_array_size()`.
    ///
    /// Panics if this value is not [`Value::Array`].
    pub fn erase_array_element(&mut self, index: usize, count: usize) {
        let arr = self
            .as_array_mut()
            .expect("erase_array_element called on a non-array value");
        if index >= arr.len() {
            return;
        }
        let end = (index + count).min(arr.len());
        arr.drain(index..end);
    }

    /// Removes all elements without shrinking storage.
    ///
    /// Panics if this value is not [`Value::Array`].
    pub fn clear_array(&mut self) {
        self.as_array_mut()
            .expect("clear_array called on a non-array value")
            .clear();
    }

    // -- object (read) ----------------------------------------------------

    /// Returns the object payload's member count.
    ///
    /// Panics if this value is not [`Value::Object`].
    #[must_use]
    pub fn get_object_size(&self) -> usize {
        self.as_object().expect("get_object_size called on a non-object value").len()
    }

    /// Returns the key at `index`.
    ///
    /// Panics if this value is not [`Value::Object`] or `index >=
    /// get_object_size()`.
    #[must_use]
    pub fn get_object_key(&self, index: usize) -> &str {
        self.as_object()
            .expect("get_object_key called on a non-object value")
            .key(index)
    }

    /// Returns the byte length of the key at `index`.
    #[must_use]
    pub fn get_object_key_length(&self, index: usize) -> usize {
        self.get_object_key(index).len()
    }

    /// Returns the value at `index`.
    ///
    /// Panics if this value is not [`Value::Object`] or `index >=
    /// get_object_size()`.
    #[must_use]
    pub fn get_object_value(&self, index: usize) -> &Value {
        self.as_object()
            .expect("get_object_value called on a non-object value")
            .value(index)
    }

    /// Linear search for `key`; returns [`crate::NOT_FOUND`] if absent.
    ///
    /// Panics if this value is not [`Value::Object`].
    #[must_use]
    pub fn find_object_index(&self, key: &str) -> usize {
        self.as_object()
            .expect("find_object_index called on a non-object value")
            .find_index(key)
    }

    /// Finds the value for the first member matching `key`.
    ///
    /// Also available as [`Value::get`], which additionally accepts any
    /// value type (returning `None` for non-objects) for ergonomic chaining.
    ///
    /// Panics if this value is not [`Value::Object`].
    #[must_use]
    pub fn find_object_value(&self, key: &str) -> Option<&Value> {
        self.as_object()
            .expect("find_object_value called on a non-object value")
            .find_value(key)
    }

    /// Finds the value for `key`, returning `None` if this value is not an
    /// object or the key is absent. Never panics.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.find_value(key))
    }

    /// Borrows the object payload, or `None` if this is not an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutably borrows the object payload, or `None` if this is not an
    /// object.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    // -- object (mutate) --------------------------------------------------

    /// Replaces this value with an empty object with storage reserved for
    /// `capacity` members.
    pub fn set_object(&mut self, capacity: usize) {
        *self = Self::Object(Object::with_capacity(capacity));
    }

    /// Reserves storage for at least `additional` more members.
    ///
    /// Panics if this value is not [`Value::Object`].
    pub fn reserve_object(&mut self, additional: usize) {
        self.as_object_mut()
            .expect("reserve_object called on a non-object value")
            .reserve(additional);
    }

    /// Shrinks storage to fit exactly the current size.
    ///
    /// Panics if this value is not [`Value::Object`].
    pub fn shrink_object(&mut self) {
        self.as_object_mut()
            .expect("shrink_object called on a non-object value")
            .shrink_to_fit();
    }

    /// Returns a reference to the existing value for `key`, or creates a
    /// new member with a [`Value::Null`] value and returns a reference to
    /// it.
    ///
    /// Panics if this value is not [`Value::Object`].
    pub fn set_object_value(&mut self, key: &str) -> &mut Value {
        self.as_object_mut()
            .expect("set_object_value called on a non-object value")
            .set_value(key)
    }

    /// Removes the member at `index`, shifting the tail left.
    ///
    /// Panics if this value is not [`Value::Object`].
    pub fn remove_object_value_index(&mut self, index: usize) {
        self.as_object_mut()
            .expect("remove_object_value_index called on a non-object value")
            .remove_at(index);
    }

    /// Removes the first member matching `key`, if any.
    ///
    /// Panics if this value is not [`Value::Object`].
    pub fn remove_object_value_key(&mut self, key: &str) {
        self.as_object_mut()
            .expect("remove_object_value_key called on a non-object value")
            .remove_by_key(key);
    }

    /// Removes all members without shrinking storage.
    ///
    /// Panics if this value is not [`Value::Object`].
    pub fn clear_object(&mut self) {
        self.as_object_mut()
            .expect("clear_object called on a non-object value")
            .clear();
    }

    // -- serialization ----------------------------------------------------

    /// Serializes this value tree to a JSON text.
    ///
    /// This is a total function: every `Value` tree, however constructed,
    /// serializes successfully (there is no error variant, unlike parsing).
    #[must_use]
    pub fn to_json_string(&self) -> String {
        crate::serialize::to_string(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
