//! Reusable slot buffers
//!
//! A [`SlotBuf`] tracks a logical length separately from the slots it has
//! already allocated. Shrinking it keeps those slots around, and the
//! accessors returned by [`SlotBuf::next_elem`] and
//! [`SlotBuf::next_ptr_elem`] hand them out again before growing.
//!
//! ```
//! use rdutil::core::slots::SlotBuf;
//!
//! let mut buf: SlotBuf<u32> = SlotBuf::new();
//! let mut next = buf.next_elem();
//! *next.next() = 7;
//! *next.next() = 9;
//! assert_eq!(buf.as_slice(), &[7, 9]);
//! ```

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct SlotBuf<T> {
    slots: Vec<T>,
    len: usize,
}

impl<T> SlotBuf<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Logical length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or retained.
    pub fn slots(&self) -> usize {
        self.slots.len()
    }

    /// Retained slots past the logical length.
    pub fn spare(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Shortens the logical length. Slots past `len` are kept for reuse.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Drops the retained slots and returns the live elements.
    pub fn into_vec(mut self) -> Vec<T> {
        self.slots.truncate(self.len);
        self.slots
    }

    fn has_spare(&self) -> bool {
        self.len < self.slots.len()
    }

    /// Extends the logical length over the next retained slot.
    fn reslice(&mut self) -> &mut T {
        debug_assert!(self.has_spare());
        self.len += 1;
        &mut self.slots[self.len - 1]
    }

    fn append(&mut self, elem: T) -> &mut T {
        // Retained slots are always consumed first, so len == slots.len() here.
        debug_assert_eq!(self.len, self.slots.len());
        self.slots.push(elem);
        self.len += 1;
        &mut self.slots[self.len - 1]
    }
}

impl<T: Default> SlotBuf<T> {
    pub fn next_elem(&mut self) -> NextElem<'_, T> {
        NextElem {
            buf: self,
            reused: 0,
            grown: 0,
        }
    }
}

impl<T: Default> SlotBuf<Option<Box<T>>> {
    pub fn next_ptr_elem(&mut self) -> NextPtrElem<'_, T> {
        NextPtrElem {
            buf: self,
            reused: 0,
            grown: 0,
        }
    }
}

impl<T> Default for SlotBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SlotBuf<T> {
    fn from(slots: Vec<T>) -> Self {
        let len = slots.len();
        Self { slots, len }
    }
}

impl<T> Index<usize> for SlotBuf<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SlotBuf<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a SlotBuf<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Hands out the next writable slot of a [`SlotBuf`] holding values.
///
/// A reused slot still holds whatever was written to it last time; callers
/// are expected to overwrite it. New slots start at `T::default()`.
pub struct NextElem<'a, T> {
    buf: &'a mut SlotBuf<T>,
    reused: usize,
    grown: usize,
}

impl<T: Default> NextElem<'_, T> {
    pub fn next(&mut self) -> &mut T {
        if self.buf.has_spare() {
            self.reused += 1;
            return self.buf.reslice();
        }

        self.grown += 1;
        tracing::trace!(len = self.buf.len, "growing slot buffer");
        self.buf.append(T::default())
    }

    /// Slots handed out from retained storage.
    pub fn reused(&self) -> usize {
        self.reused
    }

    /// Slots appended because nothing was retained.
    pub fn grown(&self) -> usize {
        self.grown
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Hands out the next writable slot of a [`SlotBuf`] of optional boxes.
///
/// The returned reference always points into a live allocation: an empty
/// reused slot is filled with a boxed `T::default()` first.
pub struct NextPtrElem<'a, T> {
    buf: &'a mut SlotBuf<Option<Box<T>>>,
    reused: usize,
    grown: usize,
}

impl<T: Default> NextPtrElem<'_, T> {
    pub fn next(&mut self) -> &mut T {
        let slot = if self.buf.has_spare() {
            self.reused += 1;
            self.buf.reslice()
        } else {
            self.grown += 1;
            tracing::trace!(len = self.buf.len, "growing boxed slot buffer");
            self.buf.append(Some(Box::default()))
        };

        slot.get_or_insert_with(Box::default)
    }

    pub fn reused(&self) -> usize {
        self.reused
    }

    pub fn grown(&self) -> usize {
        self.grown
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
