use core::fmt::Debug;

use crate::{slots, Element, ListError};

/// A list over `N` inline slots. Occupied elements form the prefix
/// `[0, len)` of the buffer; the remaining slots are kept as the caller left
/// them until a deletion zeroes one.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedList<T: Element, const N: usize> {
    slots: [T; N],
    count: usize,
}

impl<T: Element, const N: usize> Default for FixedList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const N: usize> FixedList<T, N> {
    /// Create an empty list with a zeroed buffer of capacity `N`
    pub const fn new() -> Self {
        FixedList {
            slots: [T::ZERO; N],
            count: 0,
        }
    }

    /// Take ownership of `slots` with the first `count` treated as occupied
    pub fn from_parts(slots: [T; N], count: usize) -> Result<Self, ListError> {
        slots::check_count(count, N)?;

        Ok(FixedList { slots, count })
    }

    /// Give the buffer back along with the occupied count
    pub fn into_parts(self) -> ([T; N], usize) {
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
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The occupied prefix
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.count]
    }

    /// The whole buffer, including unoccupied slots
    pub fn as_buffer(&self) -> &[T; N] {
        &self.slots
    }

    /// Whether `value` is present. Byte lists are scanned up to the first
    /// zero byte regardless of [`len`](Self::len); other widths are scanned
    /// over the occupied prefix.
    pub fn contains(&self, value: T) -> bool {
        slots::contains(&self.slots, self.count, value)
    }

    /// Remove the element at `index`, shifting later elements left and
    /// zeroing the vacated slot. Does nothing if `index >= len`.
    pub fn delete_at(&mut self, index: usize) {
        let _ = self.try_delete_at(index);
    }

    /// Like [`delete_at`](Self::delete_at) but returns the removed element,
    /// or [`ListError::IndexOutOfBounds`] with the list left unchanged
    pub fn try_delete_at(&mut self, index: usize) -> Result<T, ListError> {
        slots::delete_at(&mut self.slots, &mut self.count, index)
    }

    /// Zero the occupied prefix and reset the length to 0. Capacity is kept.
    pub fn clear(&mut self) {
        slots::clear(&mut self.slots, &mut self.count)
    }
}

impl<T: Element, const N: usize> Debug for FixedList<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
