use thiserror::Error;

/// Errors raised by the bit primitives and cursors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    /// A sub-byte bit range does not fit: `start + length` must be at most 8.
    #[error("bit range start {start} with length {length} does not fit in a byte")]
    Range { start: u8, length: u8 },

    /// A cursor was advanced past either end of its buffer.
    #[error("cursor moved outside of a {len} byte buffer")]
    OutOfBounds { len: usize },
}
