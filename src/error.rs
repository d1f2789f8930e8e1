//! Error type for fallible allocation paths.

use core::fmt::{self, Display, Formatter};

/// Error returned when a deque cannot acquire backing storage.
///
/// Produced by [`RingDeque::try_with_capacity`](crate::RingDeque::try_with_capacity)
/// and by the growth step inside [`try_push_back`](crate::RingDeque::try_push_back) /
/// [`try_push_front`](crate::RingDeque::try_push_front).  A failed growth leaves the
/// deque exactly as it was; the old buffer is only released once the new one exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReserveError {
    /// The requested slot count (or the doubled growth target) does not fit in `usize`.
    CapacityOverflow,
    /// The allocator refused a request of this many bytes.
    OutOfMemory {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}

impl Display for ReserveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::OutOfMemory { bytes } => {
                write!(f, "memory allocation of {bytes} bytes failed")
            }
        }
    }
}

impl std::error::Error for ReserveError {}
