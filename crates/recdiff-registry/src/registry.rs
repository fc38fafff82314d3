//! Differ registry and per-type bound differs.

use recdiff_core::{
    bind_type, diff_records, ChangeSet, DiffError, Record, Result, TypeBinding, TypeDescriptor,
};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A type whose descriptor can be produced without an instance.
///
/// Implementing this trait lets a record type be registered declaratively
/// via [`DifferRegistry::register_type`].
pub trait Describe {
    /// The introspected shape of the record type
    fn descriptor() -> TypeDescriptor;
}

/// A differ bound to one record type.
///
/// Holds the descriptor together with its accessor bindings, computed once
/// at bind time and reused for every instance pair.
#[derive(Debug, Clone)]
pub struct BoundDiffer {
    descriptor: TypeDescriptor,
    binding: TypeBinding,
}

impl BoundDiffer {
    /// Bind a differ for the described type.
    ///
    /// # Errors
    ///
    /// `UnsupportedShape` - the descriptor does not name a recognizable
    /// record type.
    pub fn bind(descriptor: TypeDescriptor) -> Result<Self> {
        let binding = bind_type(&descriptor)?;
        Ok(Self {
            descriptor,
            binding,
        })
    }

    /// Name of the bound record type
    pub fn type_name(&self) -> &str {
        self.binding.type_name()
    }

    /// The descriptor this differ was bound from
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Diff two instances of the bound type.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` - either instance is not of the bound type.
    pub fn diff(&self, old_instance: &dyn Record, new_instance: &dyn Record) -> Result<ChangeSet> {
        diff_records(&self.binding, old_instance, new_instance)
    }
}

/// Registry of bound differs keyed by record type name.
///
/// Bindings are computed once at registration and published behind an
/// `Arc`; afterwards lookups are read-only and never re-bind. The registry
/// is owned by the caller - there is no process-wide ambient instance.
#[derive(Debug, Default)]
pub struct DifferRegistry {
    inner: RwLock<BTreeMap<String, Arc<BoundDiffer>>>,
}

impl DifferRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind and publish a differ for the described type.
    ///
    /// First publication wins: re-registering an already-bound type name
    /// returns the existing differ without recomputing bindings.
    ///
    /// # Errors
    ///
    /// `UnsupportedShape` - the descriptor does not name a recognizable
    /// record type; nothing is published in that case.
    pub fn register(&self, descriptor: TypeDescriptor) -> Result<Arc<BoundDiffer>> {
        {
            let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = map.get(&descriptor.type_name) {
                return Ok(Arc::clone(existing));
            }
        }

        // Bind outside the write lock; publication below resolves races in
        // favour of whichever registration landed first.
        let bound = Arc::new(BoundDiffer::bind(descriptor)?);
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let published = map
            .entry(bound.type_name().to_string())
            .or_insert_with(|| {
                tracing::debug!(type_name = %bound.type_name(), "differ registered");
                Arc::clone(&bound)
            });
        Ok(Arc::clone(published))
    }

    /// Register a type through its [`Describe`] implementation.
    ///
    /// # Errors
    ///
    /// Same as [`DifferRegistry::register`].
    pub fn register_type<T: Describe>(&self) -> Result<Arc<BoundDiffer>> {
        self.register(T::descriptor())
    }

    /// Look up the differ bound for a type name, if any
    pub fn differ(&self, type_name: &str) -> Option<Arc<BoundDiffer>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(type_name).cloned()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.len()
    }

    /// Check if no type is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Diff two instances, dispatching on the old instance's type name.
    ///
    /// # Errors
    ///
    /// - `NotRegistered` - no differ is bound for the old instance's type
    /// - `TypeMismatch` - the new instance is not of the same type
    pub fn diff(&self, old_instance: &dyn Record, new_instance: &dyn Record) -> Result<ChangeSet> {
        let type_name = old_instance.type_name();
        let differ = self
            .differ(type_name)
            .ok_or_else(|| DiffError::NotRegistered {
                type_name: type_name.to_string(),
            })?;
        differ.diff(old_instance, new_instance)
    }
}
