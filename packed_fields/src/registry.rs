//! Provider-backed registries with monotonic memoization.
//!
//! Kinds are identified by [`TypeId`]; a resolved codec or converter travels
//! through the provider boundary as a type-erased `Arc` and is cached under
//! its key on first resolution. The cache only ever gains entries, so after
//! warm-up both registries behave as read-only maps and can be shared across
//! threads. Failed lookups are not cached: registering another provider and
//! retrying the same kind is expected to work.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::codec::{Codec, StandardCodecs};
use crate::convert::{Convert, UnsignedConverters};
use crate::error::FieldError;

/// Source of type descriptors.
///
/// `resolve` answers a kind with a boxed `Arc<dyn Codec<T>>` where `T` is
/// the type `kind` identifies, or `None` when the provider does not cover
/// it. A provider answering with any other erased shape has not provided
/// the kind and resolution reports the usual unsupported-kind error.
pub trait TypeProvider: Send + Sync {
    fn resolve(&self, kind: TypeId) -> Option<Box<dyn Any + Send + Sync>>;
}

/// Source of converters, keyed by the ordered (raw, entity) pair.
pub trait ConverterProvider: Send + Sync {
    fn resolve(&self, raw: TypeId, entity: TypeId) -> Option<Box<dyn Any + Send + Sync>>;
}

/// Resolves type descriptors through an ordered provider list.
pub struct TypeRegistry {
    providers: Vec<Box<dyn TypeProvider>>,
    cache: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl TypeRegistry {
    /// Creates a registry with no providers; every lookup fails until one
    /// is registered.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry preloaded with the numeric codec family.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(StandardCodecs);
        registry
    }

    /// Appends a provider. Providers are consulted in registration order
    /// and the first answer wins.
    pub fn register(&mut self, provider: impl TypeProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Resolves the codec for kind `T`, memoizing the result.
    pub fn for_kind<T: 'static>(&self) -> Result<Arc<dyn Codec<T>>, FieldError> {
        let key = TypeId::of::<T>();
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(codec) = cache
                .get(&key)
                .and_then(|entry| entry.downcast_ref::<Arc<dyn Codec<T>>>())
            {
                return Ok(Arc::clone(codec));
            }
        }

        let unsupported = || FieldError::UnsupportedKind {
            kind: type_name::<T>(),
        };
        for provider in &self.providers {
            let Some(erased) = provider.resolve(key) else {
                continue;
            };
            let codec = *erased
                .downcast::<Arc<dyn Codec<T>>>()
                .map_err(|_| unsupported())?;
            self.cache
                .write()
                .unwrap_or_else(|e| e.into_inner())
                .entry(key)
                .or_insert_with(|| Box::new(Arc::clone(&codec)));
            return Ok(codec);
        }
        Err(unsupported())
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves converters through an ordered provider list.
pub struct ConverterRegistry {
    providers: Vec<Box<dyn ConverterProvider>>,
    cache: RwLock<HashMap<(TypeId, TypeId), Box<dyn Any + Send + Sync>>>,
}

impl ConverterRegistry {
    /// Creates a registry with no providers.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry preloaded with the unsigned-widening family.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(UnsignedConverters);
        registry
    }

    /// Appends a provider. Providers are consulted in registration order
    /// and the first answer wins.
    pub fn register(&mut self, provider: impl ConverterProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Resolves the converter for the ordered pair `(R, E)`, memoizing the
    /// result.
    pub fn for_kinds<R: 'static, E: 'static>(
        &self,
    ) -> Result<Arc<dyn Convert<R, E>>, FieldError> {
        let key = (TypeId::of::<R>(), TypeId::of::<E>());
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(converter) = cache
                .get(&key)
                .and_then(|entry| entry.downcast_ref::<Arc<dyn Convert<R, E>>>())
            {
                return Ok(Arc::clone(converter));
            }
        }

        let unsupported = || FieldError::UnsupportedConversion {
            raw: type_name::<R>(),
            entity: type_name::<E>(),
        };
        for provider in &self.providers {
            let Some(erased) = provider.resolve(key.0, key.1) else {
                continue;
            };
            let converter = *erased
                .downcast::<Arc<dyn Convert<R, E>>>()
                .map_err(|_| unsupported())?;
            self.cache
                .write()
                .unwrap_or_else(|e| e.into_inner())
                .entry(key)
                .or_insert_with(|| Box::new(Arc::clone(&converter)));
            return Ok(converter);
        }
        Err(unsupported())
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ByteCodec;
    use crate::order::ByteOrder;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingBytes {
        hits: Arc<AtomicUsize>,
    }

    impl TypeProvider for CountingBytes {
        fn resolve(&self, kind: TypeId) -> Option<Box<dyn Any + Send + Sync>> {
            if kind == TypeId::of::<i8>() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Box::new(Arc::new(ByteCodec) as Arc<dyn Codec<i8>>))
            } else {
                None
            }
        }
    }

    #[test]
    fn standard_kinds_resolve() {
        let registry = TypeRegistry::standard();
        assert_eq!(registry.for_kind::<i8>().unwrap().width(), 1);
        assert_eq!(registry.for_kind::<i16>().unwrap().width(), 2);
        assert_eq!(registry.for_kind::<i32>().unwrap().width(), 4);
        assert_eq!(registry.for_kind::<i64>().unwrap().width(), 8);
    }

    #[test]
    fn unknown_kind_is_named_in_the_error() {
        let registry = TypeRegistry::standard();
        assert_eq!(
            registry.for_kind::<u128>().unwrap_err(),
            FieldError::UnsupportedKind {
                kind: type_name::<u128>()
            }
        );
    }

    #[test]
    fn a_miss_does_not_poison_other_kinds() {
        let registry = TypeRegistry::standard();
        assert!(registry.for_kind::<u128>().is_err());
        assert!(registry.for_kind::<i16>().is_ok());
        // And the failed kind stays failed without any lasting effect.
        assert!(registry.for_kind::<u128>().is_err());
    }

    #[test]
    fn resolution_is_memoized() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut registry = TypeRegistry::new();
        registry.register(CountingBytes { hits: Arc::clone(&hits) });

        let first = registry.for_kind::<i8>().unwrap();
        let second = registry.for_kind::<i8>().unwrap();
        assert_eq!(hits.load(Ordering::Relaxed), 1);
        assert_eq!(
            first.to_bytes(&-3, ByteOrder::Big),
            second.to_bytes(&-3, ByteOrder::Big)
        );
    }

    #[test]
    fn first_registered_provider_wins() {
        let first_hits = Arc::new(AtomicUsize::new(0));
        let second_hits = Arc::new(AtomicUsize::new(0));
        let mut registry = TypeRegistry::new();
        registry.register(CountingBytes { hits: Arc::clone(&first_hits) });
        registry.register(CountingBytes { hits: Arc::clone(&second_hits) });

        registry.for_kind::<i8>().unwrap();
        assert_eq!(first_hits.load(Ordering::Relaxed), 1);
        assert_eq!(second_hits.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn converter_pairs_resolve_in_one_direction_only() {
        let registry = ConverterRegistry::standard();
        assert!(registry.for_kinds::<i8, i16>().is_ok());
        assert_eq!(
            registry.for_kinds::<i16, i8>().unwrap_err(),
            FieldError::UnsupportedConversion {
                raw: type_name::<i16>(),
                entity: type_name::<i8>(),
            }
        );
    }

    #[test]
    fn converter_resolution_round_trips() {
        let registry = ConverterRegistry::standard();
        let widen = registry.for_kinds::<i8, i16>().unwrap();
        assert_eq!(widen.to_entity(-1), 255);
        assert_eq!(widen.to_raw(255), -1);
    }
}
