//! # raw_bits
//!
//! Bit-level addressing over plain byte buffers.
//!
//! The crate provides the low half of a bit-field codec: byte-local bit
//! primitives, a bit cursor that drains or fills arbitrary bit counts across
//! byte boundaries in either traversal direction, and a fixed-length
//! [`Payload`] buffer for callers that want an owned allocation.
//!
//! ```rust
//! use raw_bits::{BitReader, BitWriter, Traversal};
//!
//! let mut buffer = [0u8; 2];
//!
//! // A 6-bit quantity straddling the first byte boundary.
//! let mut writer = BitWriter::new(&mut buffer, 4, Traversal::Forward);
//! writer.write_byte(0b111111, 6).unwrap();
//! assert_eq!(buffer, [0b0000_1111, 0b1100_0000]);
//!
//! let mut reader = BitReader::new(&buffer, 4, Traversal::Forward);
//! assert_eq!(reader.read_byte(6).unwrap(), 0b111111);
//! ```
//!
//! Cursors never reallocate or grow the buffer; walking past either end is
//! reported as [`BitsError::OutOfBounds`] and signals a mis-declared layout,
//! not a recoverable condition.

pub mod bits;
pub mod cursor;
pub mod error;
pub mod payload;

pub use cursor::{BitReader, BitWriter, Traversal};
pub use error::BitsError;
pub use payload::Payload;
