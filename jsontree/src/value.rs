// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

use crate::array::Array;
use crate::object::Object;
use crate::parse_error::ParseError;

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// A JSON document node.
///
/// A value exclusively owns its payload: strings, array elements, object
/// keys and member values all live in exactly one tree and are released when
/// the value is dropped or overwritten. Equality ([`PartialEq`]) compares
/// structure, not identity: numbers by IEEE-754 `==`, arrays in order, and
/// objects by key regardless of member order. [`Clone`] is a deep copy that
/// also preserves container capacity.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    /// Raw string bytes. Usually UTF-8, but escapes may decode to unpaired low
    /// surrogates and callers may store arbitrary bytes, including NUL.
    String(Vec<u8>),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Creates a `Null` value. No allocation is made.
    pub const fn new() -> Self {
        Value::Null
    }

    /// Parses a complete JSON document. See [`crate::parse`].
    pub fn parse(text: &str) -> Result<Value, ParseError> {
        crate::parse(text)
    }

    /// Replaces `self` with the document parsed from `text`.
    ///
    /// On error `self` is left as `Null`; whatever it held before is released
    /// either way.
    pub fn parse_into(&mut self, text: &str) -> Result<(), ParseError> {
        self.set_null();
        *self = crate::parse(text)?;
        Ok(())
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Releases the payload and resets to `Null`. Calling it on a `Null`
    /// value does nothing.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// The string payload as bytes. The length of the slice is authoritative;
    /// embedded NUL bytes are part of the content.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    /// The string payload, if this is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    /// Length of the string payload in bytes.
    pub fn string_len(&self) -> Option<usize> {
        self.as_bytes().map(<[u8]>::len)
    }

    /// Copies `s` into a newly allocated string payload.
    pub fn set_string(&mut self, s: impl AsRef<[u8]>) {
        *self = Value::String(s.as_ref().to_vec());
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Replaces `self` with an empty array with room for `capacity` elements
    /// and returns it. A capacity of zero allocates nothing.
    pub fn set_array(&mut self, capacity: usize) -> &mut Array {
        *self = Value::Array(Array::with_capacity(capacity));
        match self {
            Value::Array(array) => array,
            _ => unreachable!("value was just set to an array"),
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Replaces `self` with an empty object with room for `capacity` members
    /// and returns it.
    pub fn set_object(&mut self, capacity: usize) -> &mut Object {
        *self = Value::Object(Object::with_capacity(capacity));
        match self {
            Value::Object(object) => object,
            _ => unreachable!("value was just set to an object"),
        }
    }

    /// Releases `self` and takes ownership of `src`'s payload, leaving `src`
    /// as `Null`.
    pub fn move_from(&mut self, src: &mut Value) {
        *self = core::mem::take(src);
    }

    /// Exchanges the contents of two values without copying payloads.
    pub fn swap(&mut self, other: &mut Value) {
        core::mem::swap(self, other);
    }

    /// Releases `self` and replaces it with a deep copy of `src`.
    pub fn copy_from(&mut self, src: &Value) {
        *self = src.clone();
    }

    /// Structural equality, see [`Value`].
    pub fn is_equal(&self, other: &Value) -> bool {
        self == other
    }

    /// Serializes this value to compact JSON text. See [`crate::stringify`].
    pub fn stringify(&self) -> String {
        crate::stringify(self)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::stringify(self))
    }
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::String(bytes)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}
