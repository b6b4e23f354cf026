// SPDX-License-Identifier: Apache-2.0

//! Transient working memory for the parser.
//!
//! The parser accumulates decoded string bytes, finished array elements and
//! finished object members here until the enclosing token is complete, then
//! moves them out into permanent tree storage in one exactly-sized
//! allocation. Every nesting level only ever touches the region above the
//! mark it took on entry, so pushes and pops from recursive calls never
//! interleave.

use alloc::vec::Vec;

use crate::object::Member;
use crate::value::Value;

/// Initial size of a stack's backing allocation, in bytes.
pub const SCRATCH_INIT_SIZE: usize = 256;

/// A growable LIFO buffer with mark/rewind discipline.
///
/// Growth is explicit: when a push does not fit, the capacity is increased
/// by half until it does, starting from [`SCRATCH_INIT_SIZE`] bytes worth of
/// items.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Continues growing an existing buffer. Its contents become the bottom
    /// of the stack.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Hands the whole backing buffer, spare capacity included, to the caller.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Current top of the stack, to be passed back to [`Self::pop_from`] or
    /// [`Self::rewind`].
    pub fn mark(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, item: T) {
        self.reserve_for(1);
        self.items.push(item);
    }

    /// Moves everything above `mark` into a new vector whose capacity equals
    /// its length, and rewinds the stack to `mark`.
    pub fn pop_from(&mut self, mark: usize) -> Vec<T> {
        debug_assert!(mark <= self.items.len(), "pop below the stack bottom");
        let start = mark.min(self.items.len());
        let mut out = Vec::with_capacity(self.items.len() - start);
        out.extend(self.items.drain(start..));
        out
    }

    /// Drops everything above `mark`.
    pub fn rewind(&mut self, mark: usize) {
        debug_assert!(mark <= self.items.len(), "rewind below the stack bottom");
        self.items.truncate(mark);
    }

    /// Releases the backing allocation. The stack must be empty.
    pub fn release(&mut self) {
        debug_assert!(self.items.is_empty());
        self.items = Vec::new();
    }

    fn initial_capacity() -> usize {
        (SCRATCH_INIT_SIZE / core::mem::size_of::<T>().max(1)).max(1)
    }

    fn reserve_for(&mut self, additional: usize) {
        let required = self.items.len().saturating_add(additional);
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }
        let mut grown = capacity.max(Self::initial_capacity());
        while grown < required {
            grown = grown.saturating_add(grown >> 1);
        }
        log::trace!(
            "scratch stack grows from {} to {} slots of {} bytes",
            capacity,
            grown,
            core::mem::size_of::<T>()
        );
        self.items.reserve_exact(grown - self.items.len());
    }
}

impl<T: Copy> Stack<T> {
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.reserve_for(items.len());
        self.items.extend_from_slice(items);
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The parser's complete working memory: decoded string bytes, pending
/// array elements and pending object members.
#[derive(Debug, Default)]
pub struct ScratchStack {
    pub bytes: Stack<u8>,
    pub elements: Stack<Value>,
    pub members: Stack<Member>,
}

impl ScratchStack {
    pub const fn new() -> Self {
        Self {
            bytes: Stack::new(),
            elements: Stack::new(),
            members: Stack::new(),
        }
    }

    /// Creates a scratch stack whose byte buffer can hold `capacity` decoded
    /// string bytes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut scratch = Self::new();
        scratch.bytes.reserve_for(capacity);
        scratch
    }

    /// Total number of occupied slots across all stacks.
    pub fn len(&self) -> usize {
        self.bytes.len() + self.elements.len() + self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frees all backing allocations. Only valid between documents.
    pub fn release(&mut self) {
        self.bytes.release();
        self.elements.release();
        self.members.release();
    }
}
