//! A list whose element type is chosen at runtime from a width tag, for
//! callers that hold raw byte buffers. Values cross this interface widened to
//! `i64` and are truncated to the list's element type on the way in.

use alloc::vec::Vec;

use crate::{boxed::BoxedList, Element, ElementWidth, ListError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypedList {
    Byte(BoxedList<u8>),
    Int(BoxedList<i32>),
    Long(BoxedList<i64>),
}

macro_rules! dispatch {
    ($list:expr, $inner:ident => $body:expr) => {
        match $list {
            TypedList::Byte($inner) => $body,
            TypedList::Int($inner) => $body,
            TypedList::Long($inner) => $body,
        }
    };
}

fn decode<T: Element>(bytes: &[u8], count: usize) -> Result<BoxedList<T>, ListError> {
    let elements: Vec<T> = bytes
        .chunks_exact(T::WIDTH.bytes())
        .map(T::read_ne)
        .collect();

    BoxedList::from_parts(elements.into_boxed_slice(), count)
}

fn encode<T: Element>(list: &BoxedList<T>) -> Vec<u8> {
    let width = T::WIDTH.bytes();
    let mut bytes = alloc::vec![0; list.capacity() * width];

    for (element, out) in list.as_buffer().iter().zip(bytes.chunks_exact_mut(width)) {
        element.write_ne(out);
    }

    bytes
}

impl TypedList {
    /// Interpret `bytes` as native-endian elements of `width` bytes each, the
    /// first `count` of which are occupied
    pub fn from_ne_bytes(bytes: &[u8], count: usize, width: usize) -> Result<Self, ListError> {
        let width = ElementWidth::try_from(width)?;

        if bytes.len() % width.bytes() != 0 {
            log::debug!(
                "rejected {} byte buffer for {} byte elements",
                bytes.len(),
                width.bytes()
            );
            return Err(ListError::MisalignedBuffer {
                len: bytes.len(),
                width: width.bytes(),
            });
        }

        Ok(match width {
            ElementWidth::Byte => TypedList::Byte(decode(bytes, count)?),
            ElementWidth::Int => TypedList::Int(decode(bytes, count)?),
            ElementWidth::Long => TypedList::Long(decode(bytes, count)?),
        })
    }

    /// The whole buffer as native-endian bytes, unoccupied slots included
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        dispatch!(self, list => encode(list))
    }

    pub fn width(&self) -> ElementWidth {
        match self {
            TypedList::Byte(_) => ElementWidth::Byte,
            TypedList::Int(_) => ElementWidth::Int,
            TypedList::Long(_) => ElementWidth::Long,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, list => list.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, list => list.is_empty())
    }

    pub fn capacity(&self) -> usize {
        dispatch!(self, list => list.capacity())
    }

    /// Whether `value`, truncated to the element width, is present. Byte
    /// lists are scanned up to their first zero byte regardless of
    /// [`len`](Self::len).
    pub fn contains(&self, value: i64) -> bool {
        dispatch!(self, list => list.contains(Element::narrow(value)))
    }

    /// Remove the element at `index`, shifting later elements left and
    /// zeroing the vacated slot. Does nothing if `index >= len`.
    pub fn delete_at(&mut self, index: usize) {
        let _ = self.try_delete_at(index);
    }

    /// Like [`delete_at`](Self::delete_at) but returns the removed element
    /// widened to `i64`
    pub fn try_delete_at(&mut self, index: usize) -> Result<i64, ListError> {
        dispatch!(self, list => list.try_delete_at(index).map(Element::widen))
    }

    /// Zero the first `len * width` bytes and reset the length to 0
    pub fn clear(&mut self) {
        dispatch!(self, list => list.clear())
    }
}

impl From<BoxedList<u8>> for TypedList {
    fn from(list: BoxedList<u8>) -> Self {
        TypedList::Byte(list)
    }
}

impl From<BoxedList<i32>> for TypedList {
    fn from(list: BoxedList<i32>) -> Self {
        TypedList::Int(list)
    }
}

impl From<BoxedList<i64>> for TypedList {
    fn from(list: BoxedList<i64>) -> Self {
        TypedList::Long(list)
    }
}

/// `false` when `list` is absent
pub fn contains(list: Option<&TypedList>, value: i64) -> bool {
    list.is_some_and(|list| list.contains(value))
}

/// No-op when `list` is absent or `index` is out of range
pub fn delete_at(list: Option<&mut TypedList>, index: usize) {
    if let Some(list) = list {
        list.delete_at(index);
    }
}

/// No-op when `list` is absent
pub fn clear(list: Option<&mut TypedList>) {
    if let Some(list) = list {
        list.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::{clear, contains, delete_at, TypedList};
    use crate::{boxed::BoxedList, ElementWidth, ListError};

    fn ne_bytes_i32(values: &[i32]) -> Vec<u8> {
        values.iter().flat_map(|value| value.to_ne_bytes()).collect()
    }

    #[test]
    fn int_list_end_to_end() {
        let bytes = ne_bytes_i32(&[10, 20, 30, 40]);
        let mut list = TypedList::from_ne_bytes(&bytes, 4, 4).unwrap();

        assert_eq!(list.width(), ElementWidth::Int);

        delete_at(Some(&mut list), 1);

        assert_eq!(list.to_ne_bytes(), ne_bytes_i32(&[10, 30, 40, 0]));
        assert_eq!(list.len(), 3);
        assert!(contains(Some(&list), 30));
        assert!(!contains(Some(&list), 20));

        clear(Some(&mut list));

        assert_eq!(list.to_ne_bytes(), ne_bytes_i32(&[0, 0, 0, 0]));
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn byte_list_stops_at_embedded_nul() {
        for count in 3..=4 {
            let list = TypedList::from_ne_bytes(b"ab\0c", count, 1).unwrap();

            assert!(contains(Some(&list), i64::from(b'b')));
            assert!(!contains(Some(&list), i64::from(b'c')));
        }
    }

    #[test]
    fn absent_list_is_ignored() {
        assert!(!contains(None, 0));
        delete_at(None, 0);
        clear(None);
    }

    #[test]
    fn values_are_truncated_to_element_width() {
        let list = TypedList::from(BoxedList::from(alloc::vec![-1i32, 7]));

        assert!(list.contains(-1));
        assert!(list.contains((1 << 32) | 7));
        assert!(!list.contains(i64::from(u32::MAX) + 1));
    }

    #[test]
    fn long_list_round_trips_widened_values() {
        let mut list = TypedList::from(BoxedList::from(alloc::vec![i64::MIN, i64::MAX]));

        assert!(list.contains(i64::MAX));
        assert_eq!(list.try_delete_at(0), Ok(i64::MIN));
        assert_eq!(
            list.try_delete_at(1),
            Err(ListError::IndexOutOfBounds { index: 1, count: 1 })
        );
    }

    #[test]
    fn rejects_unsupported_width() {
        assert_eq!(
            TypedList::from_ne_bytes(&[0; 6], 1, 2),
            Err(ListError::UnsupportedWidth { width: 2 })
        );
    }

    #[test]
    fn rejects_misaligned_buffer() {
        assert_eq!(
            TypedList::from_ne_bytes(&[0; 6], 1, 4),
            Err(ListError::MisalignedBuffer { len: 6, width: 4 })
        );
    }

    #[test]
    fn rejects_count_past_capacity() {
        assert_eq!(
            TypedList::from_ne_bytes(&[0; 16], 3, 8),
            Err(ListError::CountExceedsCapacity {
                count: 3,
                capacity: 2
            })
        );
    }

    proptest! {
        #[test]
        fn clear_zeroes_exactly_the_occupied_bytes(
            values in prop::collection::vec(any::<i64>(), 1..32),
            count_seed in any::<usize>(),
        ) {
            let count = count_seed % (values.len() + 1);
            let bytes: Vec<u8> = values.iter().flat_map(|value| value.to_ne_bytes()).collect();
            let mut list = TypedList::from_ne_bytes(&bytes, count, 8).unwrap();

            list.clear();
            let cleared = list.to_ne_bytes();

            prop_assert!(cleared[..count * 8].iter().all(|byte| *byte == 0));
            prop_assert_eq!(&cleared[count * 8..], &bytes[count * 8..]);
            prop_assert_eq!(list.len(), 0);

            list.clear();
            prop_assert_eq!(list.to_ne_bytes(), cleared);
        }

        #[test]
        fn int_membership_is_bounded_by_count(
            values in prop::collection::vec(any::<i32>(), 0..32),
            count_seed in any::<usize>(),
            probe in any::<i32>(),
        ) {
            let count = count_seed % (values.len() + 1);
            let list = TypedList::from_ne_bytes(&ne_bytes_i32(&values), count, 4).unwrap();

            prop_assert_eq!(
                contains(Some(&list), i64::from(probe)),
                values[..count].contains(&probe)
            );
        }
    }
}
