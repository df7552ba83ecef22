use alloc::{boxed::Box, vec::Vec};
use core::fmt::Debug;

use crate::{slots, Element, ListError};

/// A list over a caller-allocated heap buffer. The buffer is never resized;
/// [`into_parts`](BoxedList::into_parts) hands it back for the caller to
/// reuse or drop.
#[derive(Clone, PartialEq, Eq)]
pub struct BoxedList<T: Element> {
    slots: Box<[T]>,
    count: usize,
}

impl<T: Element> BoxedList<T> {
    /// Create an empty list with a zeroed buffer of `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        BoxedList {
            slots: alloc::vec![T::ZERO; capacity].into_boxed_slice(),
            count: 0,
        }
    }

    /// Take ownership of `slots` with the first `count` treated as occupied
    pub fn from_parts(slots: Box<[T]>, count: usize) -> Result<Self, ListError> {
        slots::check_count(count, slots.len())?;

        Ok(BoxedList { slots, count })
    }

    /// Give the buffer back along with the occupied count
    pub fn into_parts(self) -> (Box<[T]>, usize) {
        (self.slots, self.count)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count.eq(&0)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.count]
    }

    /// The whole buffer, including unoccupied slots
    pub fn as_buffer(&self) -> &[T] {
        &self.slots
    }

    /// Whether `value` is present. Byte lists are scanned up to the first
    /// zero byte regardless of [`len`](Self::len).
    pub fn contains(&self, value: T) -> bool {
        slots::contains(&self.slots[..], self.count, value)
    }

    /// Remove the element at `index`, shifting later elements left and
    /// zeroing the vacated slot. Does nothing if `index >= len`.
    pub fn delete_at(&mut self, index: usize) {
        let _ = self.try_delete_at(index);
    }

    /// Like [`delete_at`](Self::delete_at) but returns the removed element,
    /// or [`ListError::IndexOutOfBounds`] with the list left unchanged
    pub fn try_delete_at(&mut self, index: usize) -> Result<T, ListError> {
        slots::delete_at(&mut self.slots[..], &mut self.count, index)
    }

    /// Zero the occupied prefix and reset the length to 0. The buffer is
    /// neither freed nor shrunk.
    pub fn clear(&mut self) {
        slots::clear(&mut self.slots[..], &mut self.count)
    }
}

/// Every element of the vector becomes occupied; spare vector capacity is
/// discarded.
impl<T: Element> From<Vec<T>> for BoxedList<T> {
    fn from(elements: Vec<T>) -> Self {
        let count = elements.len();

        BoxedList {
            slots: elements.into_boxed_slice(),
            count,
        }
    }
}

impl<T: Element> Debug for BoxedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
