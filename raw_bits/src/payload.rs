//! Caller-owned backing buffer shared by any number of field overlays.
//!
//! A [`Payload`] is a fixed-length byte allocation: there is deliberately no
//! push/resize API, because overlays address it by bit offset and a length
//! change would invalidate every declared layout. Overlapping overlays are
//! expected; exclusive access for a write is expressed through the usual
//! `&mut` reborrow of the slice, not through the payload type itself.

use bytemuck::Pod;
use core::ops::{Deref, DerefMut};

/// Fixed-length, mutable byte buffer.
///
/// # Examples
///
/// ```
/// use raw_bits::Payload;
///
/// let mut payload = Payload::zeroed(4);
/// payload.as_mut_slice()[0] = 0xAB;
/// assert_eq!(payload.len(), 4);
/// assert_eq!(payload[0], 0xAB);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    /// Creates a zero-filled buffer of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self { bytes: vec![0; len] }
    }

    /// Copies `bytes` into a new buffer.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    /// Builds a buffer from the raw bytes of a slice of plain-old-data
    /// values, in their in-memory representation.
    ///
    /// ```
    /// use raw_bits::Payload;
    ///
    /// let words: [u16; 2] = [0x0102, 0x0304];
    /// let payload = Payload::from_pod_slice(&words);
    /// assert_eq!(payload.len(), 4);
    /// ```
    pub fn from_pod_slice<T: Pod>(values: &[T]) -> Self {
        Self {
            bytes: bytemuck::cast_slice(values).to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the buffer, returning the bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl Deref for Payload {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for Payload {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck_derive::{Pod, Zeroable};

    #[repr(C)]
    #[derive(Clone, Copy, Pod, Zeroable)]
    struct Header {
        id: u16,
        flags: u16,
    }

    #[test]
    fn zeroed_and_len() {
        let payload = Payload::zeroed(6);
        assert_eq!(payload.len(), 6);
        assert!(payload.iter().all(|b| *b == 0));
    }

    #[test]
    fn from_pod_slice_keeps_raw_bytes() {
        let headers = [Header { id: 0x0102, flags: 0xA0B0 }];
        let payload = Payload::from_pod_slice(&headers);
        assert_eq!(payload.len(), 4);
        assert_eq!(
            payload.as_slice(),
            bytemuck::bytes_of(&headers[0])
        );
    }

    #[test]
    fn slice_access_mutates_in_place() {
        let mut payload = Payload::from_slice(&[1, 2, 3]);
        payload.as_mut_slice()[1] = 9;
        assert_eq!(payload.into_vec(), vec![1, 9, 3]);
    }
}
