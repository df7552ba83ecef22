//! Fixed-capacity lists over byte, 32-bit and 64-bit elements.
//!
//! Lists never grow: the caller hands over a pre-sized buffer along with the
//! number of occupied slots, and the list supports membership tests, in-place
//! deletion by index, and bulk clearing. [`heapless::FixedList`] keeps its
//! slots inline, [`boxed::BoxedList`] keeps them on the heap, and
//! [`tagged::TypedList`] selects the element type at runtime from a width tag.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod boxed;
pub mod error;
pub mod heapless;
mod slots;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod tagged;

use core::fmt::Debug;

pub use error::ListError;

mod sealed {
    pub trait Sealed {}
}

/// Storage width of a list element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementWidth {
    /// 1 byte, stored as `u8`
    Byte = 1,
    /// 4 bytes, stored as `i32`
    Int = 4,
    /// 8 bytes, stored as `i64`
    Long = 8,
}

impl ElementWidth {
    /// Number of bytes occupied by one element
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for ElementWidth {
    type Error = ListError;

    fn try_from(width: usize) -> Result<Self, Self::Error> {
        match width {
            1 => Ok(ElementWidth::Byte),
            4 => Ok(ElementWidth::Int),
            8 => Ok(ElementWidth::Long),
            width => Err(ListError::UnsupportedWidth { width }),
        }
    }
}

/// An element type a list can hold. Implemented for `u8`, `i32` and `i64`.
pub trait Element: Copy + PartialEq + Debug + sealed::Sealed {
    const WIDTH: ElementWidth;
    const ZERO: Self;

    /// Byte buffers are searched as NUL-terminated strings: the scan stops at
    /// the first zero byte rather than at the logical count.
    const NUL_TERMINATED: bool;

    /// Truncate a widened value down to this element type
    fn narrow(value: i64) -> Self;

    fn widen(self) -> i64;

    /// Read one element from exactly `WIDTH` native-endian bytes
    fn read_ne(bytes: &[u8]) -> Self;

    /// Write this element into exactly `WIDTH` native-endian bytes
    fn write_ne(self, out: &mut [u8]);
}

macro_rules! impl_element {
    ($ty:ty, $width:expr, $nul_terminated:expr) => {
        impl sealed::Sealed for $ty {}

        impl Element for $ty {
            const WIDTH: ElementWidth = $width;
            const ZERO: Self = 0;
            const NUL_TERMINATED: bool = $nul_terminated;

            #[inline]
            fn narrow(value: i64) -> Self {
                value as $ty
            }

            #[inline]
            fn widen(self) -> i64 {
                self as i64
            }

            #[inline]
            fn read_ne(bytes: &[u8]) -> Self {
                let mut buf = [0; core::mem::size_of::<$ty>()];
                buf.copy_from_slice(bytes);
                <$ty>::from_ne_bytes(buf)
            }

            #[inline]
            fn write_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }
        }
    };
}

impl_element!(u8, ElementWidth::Byte, true);
impl_element!(i32, ElementWidth::Int, false);
impl_element!(i64, ElementWidth::Long, false);
