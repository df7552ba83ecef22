//! Operations shared by every list kind, expressed over a buffer and the
//! number of occupied slots at its front.

use log::{debug, trace};

use crate::{Element, ListError};

/// The part of `slots` a membership test looks at
pub(crate) fn search_window<T: Element>(slots: &[T], count: usize) -> &[T] {
    if T::NUL_TERMINATED {
        // Bounded by capacity, not by count
        match slots.iter().position(|slot| slot.eq(&T::ZERO)) {
            Some(end) => &slots[..end],
            None => slots,
        }
    } else {
        &slots[..count]
    }
}

pub(crate) fn contains<T: Element>(slots: &[T], count: usize, value: T) -> bool {
    search_window(slots, count).contains(&value)
}

/// Shift everything after `index` left by one, zero the vacated last slot and
/// shrink `count`. Leaves `slots` and `count` untouched on error.
pub(crate) fn delete_at<T: Element>(
    slots: &mut [T],
    count: &mut usize,
    index: usize,
) -> Result<T, ListError> {
    if index >= *count {
        debug!(
            "rejected deletion at index {index} from a list of {} elements",
            *count
        );
        return Err(ListError::IndexOutOfBounds {
            index,
            count: *count,
        });
    }

    let removed = slots[index];
    let last = *count - 1;

    slots.copy_within(index + 1..*count, index);
    slots[last] = T::ZERO;
    *count = last;

    trace!("deleted index {index}, {last} elements remain");

    Ok(removed)
}

/// Zero the occupied prefix and reset `count`. Slots past the prefix are left
/// as they were.
pub(crate) fn clear<T: Element>(slots: &mut [T], count: &mut usize) {
    trace!(
        "clearing {} elements ({} bytes)",
        *count,
        *count * T::WIDTH.bytes()
    );

    slots[..*count].fill(T::ZERO);
    *count = 0;
}

pub(crate) fn check_count(count: usize, capacity: usize) -> Result<(), ListError> {
    if count > capacity {
        debug!("rejected count {count} for a buffer of {capacity} elements");
        Err(ListError::CountExceedsCapacity { count, capacity })
    } else {
        Ok(())
    }
}
