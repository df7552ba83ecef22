use thiserror::Error;

/// Reasons a list operation or construction was rejected
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} is out of bounds for a list of {count} elements")]
    IndexOutOfBounds { index: usize, count: usize },
    #[error("count {count} exceeds the buffer capacity of {capacity} elements")]
    CountExceedsCapacity { count: usize, capacity: usize },
    #[error("element width {width} is not one of 1, 4 or 8 bytes")]
    UnsupportedWidth { width: usize },
    #[error("buffer of {len} bytes is not a multiple of the {width} byte element width")]
    MisalignedBuffer { len: usize, width: usize },
}
