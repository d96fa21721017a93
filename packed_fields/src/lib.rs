//! # packed_fields
//!
//! Typed field views over shared byte buffers.
//!
//! This is the upper half of the bit-field codec: `raw_bits` moves arbitrary
//! bit ranges in and out of a buffer, and this crate gives those ranges
//! types. A [`Field`] binds a bit offset, a bit length and a [`ByteOrder`]
//! to a [`Codec`] for the raw wire kind and a [`Convert`] transform to the
//! entity kind the caller works with. Codecs and converters are resolved
//! through provider [`registry`] objects with memoized lookup.
//!
//! ```rust
//! use packed_fields::{ByteOrder, ConverterRegistry, Field, TypeRegistry};
//!
//! let types = TypeRegistry::standard();
//! let converters = ConverterRegistry::standard();
//!
//! // A 16-bit wire value exposed as an unsigned quantity in an i32.
//! let field = Field::with_converter(
//!     16,
//!     16,
//!     ByteOrder::Big,
//!     types.for_kind::<i16>().unwrap(),
//!     converters.for_kinds::<i16, i32>().unwrap(),
//! );
//!
//! let mut buffer = [0x0F, 0x72, 0xDA, 0x9D];
//! assert_eq!(field.get(&buffer).unwrap(), 55965);
//! field.set(&mut buffer, 875).unwrap();
//! assert_eq!(buffer, [0x0F, 0x72, 0x03, 0x6B]);
//! ```
//!
//! Buffers are passed explicitly into every `get`/`set`, so overlapping
//! fields over one buffer are ordinary values; nothing holds the buffer
//! between calls.

pub mod codec;
pub mod convert;
pub mod error;
pub mod field;
pub mod order;
pub mod registry;

pub use codec::{Codec, StandardCodecs};
pub use convert::{Convert, Identity, UnsignedConverters};
pub use error::FieldError;
pub use field::Field;
pub use order::ByteOrder;
pub use registry::{ConverterProvider, ConverterRegistry, TypeProvider, TypeRegistry};
