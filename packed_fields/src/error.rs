use raw_bits::BitsError;
use thiserror::Error;

/// Errors raised while resolving, decoding or applying a typed field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Bit addressing failed underneath the field (mis-declared offset,
    /// length, or a buffer too small for the layout).
    #[error(transparent)]
    Bits(#[from] BitsError),

    /// No registered type provider answered for the requested kind.
    #[error("no codec registered for kind {kind}")]
    UnsupportedKind { kind: &'static str },

    /// No registered converter provider answered for the requested pair.
    #[error("no converter registered for raw kind {raw} to entity kind {entity}")]
    UnsupportedConversion {
        raw: &'static str,
        entity: &'static str,
    },

    /// A codec was handed a byte count that does not match its fixed width.
    #[error("codec for {kind} works on {expected} bytes, field supplies {actual}")]
    SizeMismatch {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}
