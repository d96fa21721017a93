//! Type descriptors: fixed-width codecs between host values and raw bytes.
//!
//! The numeric family is a closed set sharing one framing: allocate exactly
//! the declared width on encode, demand exactly that width on decode, honor
//! the requested [`ByteOrder`] in both directions. Each width only supplies
//! its primitive type; everything else comes from the macro.

use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use crate::error::FieldError;
use crate::order::ByteOrder;
use crate::registry::TypeProvider;

/// Encodes and decodes one value kind at a fixed byte width.
pub trait Codec<T>: std::fmt::Debug + Send + Sync {
    /// Encodes `value` into exactly `width()` bytes in the given order.
    fn to_bytes(&self, value: &T, order: ByteOrder) -> Vec<u8>;

    /// Decodes exactly `width()` bytes in the given order.
    ///
    /// Fails with [`FieldError::SizeMismatch`] when `bytes` has any other
    /// length; a mis-sized slice means the field layout and the kind
    /// disagree, and nothing is decoded.
    fn from_bytes(&self, bytes: &[u8], order: ByteOrder) -> Result<T, FieldError>;

    /// Encoded width in bytes.
    fn width(&self) -> usize;
}

macro_rules! int_codec {
    ($(#[$doc:meta])* $codec:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $codec;

        impl Codec<$ty> for $codec {
            fn to_bytes(&self, value: &$ty, order: ByteOrder) -> Vec<u8> {
                match order {
                    ByteOrder::Big => value.to_be_bytes().to_vec(),
                    ByteOrder::Little => value.to_le_bytes().to_vec(),
                }
            }

            fn from_bytes(&self, bytes: &[u8], order: ByteOrder) -> Result<$ty, FieldError> {
                let raw: [u8; size_of::<$ty>()] =
                    bytes.try_into().map_err(|_| FieldError::SizeMismatch {
                        kind: type_name::<$ty>(),
                        expected: size_of::<$ty>(),
                        actual: bytes.len(),
                    })?;
                Ok(match order {
                    ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    ByteOrder::Little => <$ty>::from_le_bytes(raw),
                })
            }

            fn width(&self) -> usize {
                size_of::<$ty>()
            }
        }
    };
}

int_codec!(
    /// 8-bit signed integer codec.
    ByteCodec,
    i8
);
int_codec!(
    /// 16-bit signed integer codec.
    ShortCodec,
    i16
);
int_codec!(
    /// 32-bit signed integer codec.
    IntCodec,
    i32
);
int_codec!(
    /// 64-bit signed integer codec.
    LongCodec,
    i64
);

/// Type provider covering the numeric codec family.
#[derive(Debug, Default)]
pub struct StandardCodecs;

impl TypeProvider for StandardCodecs {
    fn resolve(&self, kind: TypeId) -> Option<Box<dyn Any + Send + Sync>> {
        if kind == TypeId::of::<i8>() {
            Some(Box::new(Arc::new(ByteCodec) as Arc<dyn Codec<i8>>))
        } else if kind == TypeId::of::<i16>() {
            Some(Box::new(Arc::new(ShortCodec) as Arc<dyn Codec<i16>>))
        } else if kind == TypeId::of::<i32>() {
            Some(Box::new(Arc::new(IntCodec) as Arc<dyn Codec<i32>>))
        } else if kind == TypeId::of::<i64>() {
            Some(Box::new(Arc::new(LongCodec) as Arc<dyn Codec<i64>>))
        } else {
            None
        }
    }
}
