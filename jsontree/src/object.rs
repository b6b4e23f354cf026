// SPDX-License-Identifier: Apache-2.0

//! Growable object container.
//!
//! Members are kept in insertion order and looked up by a linear scan. The
//! container does not deduplicate keys: [`Object::set_value`] always appends,
//! and lookups return the first match.

use alloc::vec::Vec;

use crate::value::Value;

/// A key/value pair inside an object. The key is an owned byte buffer,
/// independent of any [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    key: Vec<u8>,
    value: Value,
}

impl Member {
    pub fn new(key: impl Into<Vec<u8>>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The key, if it is valid UTF-8.
    pub fn key_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.key).ok()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_parts(self) -> (Vec<u8>, Value) {
        (self.key, self.value)
    }
}

/// An ordered sequence of [`Member`]s.
#[derive(Debug, Default)]
pub struct Object {
    members: Vec<Member>,
}

impl Object {
    /// Creates an empty object without allocating.
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Creates an empty object with room for exactly `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn from_vec(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    pub fn get_member(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn get_key(&self, index: usize) -> Option<&[u8]> {
        self.members.get(index).map(Member::key)
    }

    pub fn get_key_len(&self, index: usize) -> Option<usize> {
        self.get_key(index).map(<[u8]>::len)
    }

    pub fn get_value(&self, index: usize) -> Option<&Value> {
        self.members.get(index).map(Member::value)
    }

    pub fn get_value_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.members.get_mut(index).map(Member::value_mut)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Grows the capacity to at least `capacity`. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.members.capacity() {
            self.members.reserve_exact(capacity - self.members.len());
        }
    }

    /// Reallocates down to exactly the current length.
    pub fn shrink(&mut self) {
        self.members.shrink_to_fit();
    }

    /// Releases every member. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Appends a member with a copy of `key` and a `Null` value, and returns
    /// the value slot.
    ///
    /// An existing member with the same key is left alone; for upsert
    /// semantics look the key up with [`Self::find_value_mut`] first.
    pub fn set_value(&mut self, key: impl AsRef<[u8]>) -> &mut Value {
        let len = self.members.len();
        let capacity = self.members.capacity();
        if len == capacity {
            let grown = if capacity == 0 { 1 } else { capacity * 2 };
            self.members.reserve_exact(grown - len);
        }
        self.members
            .push(Member::new(key.as_ref().to_vec(), Value::Null));
        &mut self.members[len].value
    }

    /// Inserts `value` under `key` (appending, like [`Self::set_value`]).
    pub fn push(&mut self, key: impl AsRef<[u8]>, value: Value) {
        *self.set_value(key) = value;
    }

    /// Removes the member at `index`, moving later members down by one.
    pub fn remove(&mut self, index: usize) -> Option<Member> {
        if index < self.members.len() {
            Some(self.members.remove(index))
        } else {
            None
        }
    }

    /// Index of the first member whose key equals `key`.
    pub fn find_index(&self, key: impl AsRef<[u8]>) -> Option<usize> {
        let key = key.as_ref();
        self.members
            .iter()
            .position(|member| member.key.len() == key.len() && member.key == key)
    }

    pub fn find_value(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.find_index(key).and_then(|index| self.get_value(index))
    }

    pub fn find_value_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut Value> {
        let index = self.find_index(key)?;
        self.get_value_mut(index)
    }

    /// Value of the `occurrence`-th member (counting from zero) whose key
    /// equals `key`.
    fn nth_value(&self, key: &[u8], occurrence: usize) -> Option<&Value> {
        self.members
            .iter()
            .filter(|member| member.key == key)
            .nth(occurrence)
            .map(Member::value)
    }
}

/// Deep copy; the copy has the same capacity as the source.
impl Clone for Object {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for member in &self.members {
            copy.push(&member.key, member.value.clone());
        }
        copy
    }
}

/// Order-independent equality: same member count and every member found by
/// key on the other side with an equal value.
///
/// With duplicate keys, the n-th member under a key is paired with the n-th
/// member under that key on the other side. Every member takes part in exactly
/// one pairing, so each nested value is compared once and the relation stays
/// symmetric.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.members.iter().enumerate().all(|(index, member)| {
                let occurrence = self.members[..index]
                    .iter()
                    .filter(|earlier| earlier.key == member.key)
                    .count();
                other
                    .nth_value(&member.key, occurrence)
                    .is_some_and(|value| *value == member.value)
            })
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = core::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl IntoIterator for Object {
    type Item = Member;
    type IntoIter = alloc::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl FromIterator<Member> for Object {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_of(pairs: &[(&str, f64)]) -> Object {
        pairs
            .iter()
            .map(|&(key, n)| Member::new(key, Value::from(n)))
            .collect()
    }

    #[test]
    fn test_new_does_not_allocate() {
        let object = Object::new();
        assert_eq!(object.len(), 0);
        assert_eq!(object.capacity(), 0);
    }

    #[test]
    fn test_set_value_appends_and_grows() {
        let mut object = Object::new();
        for (i, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
            object.set_value(key).set_number(i as f64);
        }
        assert_eq!(object.len(), 5);
        assert!(object.capacity() >= 5);
        assert_eq!(object.get_key(0), Some(&b"a"[..]));
        assert_eq!(object.get_key_len(4), Some(1));
        assert_eq!(object.get_value(4), Some(&Value::from(4.0)));
        assert_eq!(object.get_key(5), None);
    }

    #[test]
    fn test_find_index_absent_and_present() {
        let object = object_of(&[("first", 1.0), ("second", 2.0)]);
        assert_eq!(object.find_index("second"), Some(1));
        assert_eq!(object.find_index("third"), None);
        assert_eq!(object.find_index("firs"), None);
        assert_eq!(object.find_index(""), None);
        assert_eq!(object.find_value("first"), Some(&Value::from(1.0)));
        assert_eq!(object.find_value(b"nope"), None);
    }

    #[test]
    fn test_duplicate_keys_are_kept_and_first_wins() {
        let mut object = Object::new();
        object.push("k", Value::from(1.0));
        object.push("other", Value::Null);
        object.push("k", Value::from(2.0));
        assert_eq!(object.len(), 3);
        assert_eq!(object.find_index("k"), Some(0));
        assert_eq!(object.find_value("k"), Some(&Value::from(1.0)));
    }

    #[test]
    fn test_upsert_via_find() {
        let mut object = object_of(&[("a", 1.0)]);
        match object.find_value_mut("a") {
            Some(value) => value.set_string("replaced"),
            None => panic!("key should exist"),
        }
        assert_eq!(object.len(), 1);
        assert_eq!(object.find_value("a").and_then(Value::as_str), Some("replaced"));
    }

    #[test]
    fn test_remove_compacts() {
        let mut object = object_of(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let removed = object.remove(1).expect("member 1 exists");
        assert_eq!(removed.key(), b"b");
        assert_eq!(object.len(), 2);
        assert_eq!(object.get_key(1), Some(&b"c"[..]));
        assert_eq!(object.find_index("b"), None);
        assert!(object.remove(2).is_none());
    }

    #[test]
    fn test_reserve_shrink_clear() {
        let mut object = Object::new();
        object.reserve(10);
        assert!(object.capacity() >= 10);
        object.push("a", Value::Null);
        object.shrink();
        assert_eq!(object.capacity(), 1);
        object.clear();
        assert!(object.is_empty());
        assert_eq!(object.capacity(), 1);
    }

    #[test]
    fn test_equality_ignores_member_order() {
        let ab = object_of(&[("a", 1.0), ("b", 2.0)]);
        let ba = object_of(&[("b", 2.0), ("a", 1.0)]);
        assert_eq!(ab, ba);
        assert_eq!(ba, ab);
        assert_ne!(ab, object_of(&[("a", 1.0), ("b", 3.0)]));
        assert_ne!(ab, object_of(&[("a", 1.0)]));
        assert_ne!(ab, object_of(&[("a", 1.0), ("c", 2.0)]));
    }

    #[test]
    fn test_equality_with_duplicate_keys_is_symmetric() {
        let left = object_of(&[("a", 1.0), ("a", 2.0)]);
        let right = object_of(&[("a", 1.0), ("a", 1.0)]);
        assert_ne!(left, right);
        assert_ne!(right, left);

        let left = object_of(&[("a", 1.0), ("b", 0.0), ("a", 2.0)]);
        let right = object_of(&[("b", 0.0), ("a", 1.0), ("a", 2.0)]);
        assert_eq!(left, right);
        assert_eq!(right, left);
    }

    #[test]
    fn test_equality_of_deeply_nested_objects() {
        let mut left = Value::from(1.0);
        for _ in 0..200 {
            let mut outer = Object::with_capacity(1);
            outer.push("k", left);
            left = Value::Object(outer);
        }
        let mut right = left.clone();
        assert_eq!(left, right);

        let mut leaf = &mut right;
        for _ in 0..200 {
            leaf = leaf.as_object_mut().unwrap().get_value_mut(0).unwrap();
        }
        leaf.set_number(2.0);
        assert_ne!(left, right);
        assert_ne!(right, left);
    }

    #[test]
    fn test_clone_is_deep_and_keeps_capacity() {
        let mut object = Object::with_capacity(8);
        object.push("k", Value::from("v"));
        let mut copy = object.clone();
        assert_eq!(copy.capacity(), object.capacity());
        assert_eq!(copy, object);
        copy.find_value_mut("k").unwrap().set_number(0.0);
        assert_eq!(object.find_value("k").and_then(Value::as_str), Some("v"));
    }
}
