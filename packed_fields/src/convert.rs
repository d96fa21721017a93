//! Converters between a raw decoded value and its semantic entity value.
//!
//! A converter is a stateless two-way transform. The unsigned-widening
//! family exposes a raw signed bit pattern as the unsigned value it carries,
//! held in the next wider type; narrowing back truncates to the raw bit
//! pattern without range checks, so the pair round-trips exactly.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::registry::ConverterProvider;

/// Two-way transform between a raw kind and an entity kind.
pub trait Convert<R, E>: std::fmt::Debug + Send + Sync {
    fn to_entity(&self, raw: R) -> E;
    fn to_raw(&self, entity: E) -> R;
}

/// Pass-through converter for fields whose raw and entity kinds coincide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> Convert<T, T> for Identity {
    fn to_entity(&self, raw: T) -> T {
        raw
    }

    fn to_raw(&self, entity: T) -> T {
        entity
    }
}

/// `i8` bit pattern read as an unsigned byte, held in an `i16`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedByteToShort;

impl Convert<i8, i16> for UnsignedByteToShort {
    fn to_entity(&self, raw: i8) -> i16 {
        i16::from(raw as u8)
    }

    fn to_raw(&self, entity: i16) -> i8 {
        entity as i8
    }
}

/// `i16` bit pattern read as an unsigned short, held in an `i32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedShortToInt;

impl Convert<i16, i32> for UnsignedShortToInt {
    fn to_entity(&self, raw: i16) -> i32 {
        i32::from(raw as u16)
    }

    fn to_raw(&self, entity: i32) -> i16 {
        entity as i16
    }
}

/// `i32` bit pattern read as an unsigned int, held in an `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedIntToLong;

impl Convert<i32, i64> for UnsignedIntToLong {
    fn to_entity(&self, raw: i32) -> i64 {
        i64::from(raw as u32)
    }

    fn to_raw(&self, entity: i64) -> i32 {
        entity as i32
    }
}

/// `i64` bit pattern rendered as an unsigned decimal string.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedLongToDecimal;

impl Convert<i64, String> for UnsignedLongToDecimal {
    fn to_entity(&self, raw: i64) -> String {
        (raw as u64).to_string()
    }

    /// # Panics
    ///
    /// Panics when `entity` is not the decimal rendering of a `u64`; a field
    /// declared with this converter owes it well-formed entity values.
    fn to_raw(&self, entity: String) -> i64 {
        entity
            .parse::<u64>()
            .expect("entity must be an unsigned decimal string") as i64
    }
}

/// Converter provider covering the unsigned-widening family.
#[derive(Debug, Default)]
pub struct UnsignedConverters;

impl ConverterProvider for UnsignedConverters {
    fn resolve(&self, raw: TypeId, entity: TypeId) -> Option<Box<dyn Any + Send + Sync>> {
        if raw == TypeId::of::<i8>() && entity == TypeId::of::<i16>() {
            Some(Box::new(
                Arc::new(UnsignedByteToShort) as Arc<dyn Convert<i8, i16>>
            ))
        } else if raw == TypeId::of::<i16>() && entity == TypeId::of::<i32>() {
            Some(Box::new(
                Arc::new(UnsignedShortToInt) as Arc<dyn Convert<i16, i32>>
            ))
        } else if raw == TypeId::of::<i32>() && entity == TypeId::of::<i64>() {
            Some(Box::new(
                Arc::new(UnsignedIntToLong) as Arc<dyn Convert<i32, i64>>
            ))
        } else if raw == TypeId::of::<i64>() && entity == TypeId::of::<String>() {
            Some(Box::new(
                Arc::new(UnsignedLongToDecimal) as Arc<dyn Convert<i64, String>>
            ))
        } else {
            None
        }
    }
}
