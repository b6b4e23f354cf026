// SPDX-License-Identifier: Apache-2.0

//! Growable array container.
//!
//! Capacity is managed explicitly rather than left to `Vec`'s amortized
//! policy: construction allocates exactly what was asked for, appends double
//! the capacity starting from one slot, and nothing shrinks unless
//! [`Array::shrink`] is called.

use alloc::vec::Vec;

use crate::value::Value;

/// An ordered sequence of exclusively owned [`Value`]s.
#[derive(Debug, Default)]
pub struct Array {
    elements: Vec<Value>,
}

impl Array {
    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Wraps already built elements, e.g. an exactly sized region popped off
    /// the parser's scratch stack.
    pub(crate) fn from_vec(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.elements.get_mut(index)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Value> {
        self.elements.iter_mut()
    }

    /// Grows the capacity to at least `capacity`. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.elements.capacity() {
            self.elements.reserve_exact(capacity - self.elements.len());
        }
    }

    /// Reallocates down to exactly the current length.
    pub fn shrink(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// Appends a `Null` element and returns it for the caller to fill in.
    pub fn push_back(&mut self) -> &mut Value {
        self.grow_for_one();
        self.elements.push(Value::Null);
        let last = self.elements.len() - 1;
        &mut self.elements[last]
    }

    /// Appends `value`.
    pub fn push(&mut self, value: Value) {
        *self.push_back() = value;
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<Value> {
        self.elements.pop()
    }

    /// Opens a `Null` slot at `index`, shifting every later element up by one,
    /// and returns it.
    ///
    /// # Panics
    /// If `index >= len`. Appending at the end is [`Self::push_back`]'s job.
    pub fn insert(&mut self, index: usize) -> &mut Value {
        assert!(
            index < self.elements.len(),
            "insert index {index} out of bounds for array of length {}",
            self.elements.len()
        );
        self.grow_for_one();
        self.elements.insert(index, Value::Null);
        &mut self.elements[index]
    }

    /// Releases `count` elements starting at `index` and moves the later
    /// elements down. The capacity is unchanged.
    ///
    /// # Panics
    /// If `index + count > len`.
    pub fn erase(&mut self, index: usize, count: usize) {
        let end = index.checked_add(count).filter(|&end| end <= self.elements.len());
        let Some(end) = end else {
            panic!(
                "erase range {index}+{count} out of bounds for array of length {}",
                self.elements.len()
            );
        };
        self.elements.drain(index..end);
    }

    /// Releases every element. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Doubles the capacity (starting from one) when the array is full.
    fn grow_for_one(&mut self) {
        let len = self.elements.len();
        let capacity = self.elements.capacity();
        if len == capacity {
            let grown = if capacity == 0 { 1 } else { capacity * 2 };
            self.elements.reserve_exact(grown - len);
        }
    }
}

/// Deep copy; the copy has the same capacity as the source.
impl Clone for Array {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for element in &self.elements {
            copy.elements.push(element.clone());
        }
        copy
    }
}

/// Element-wise, order-sensitive equality.
impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl core::ops::Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elements[index]
    }
}

impl core::ops::IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Self { elements }
    }
}
