//! Accessor binder.
//!
//! Given a type descriptor, decides per field how its value is read from
//! an instance: through a named accessor, through direct field access, or
//! not at all. Bindings are computed once per type and reused for every
//! instance pair of that type.

use crate::descriptor::{AccessorTable, FieldDescriptor, TypeDescriptor, ValueCategory};
use crate::errors::{DiffError, Result};
use crate::resolver::accessor_core_name;

/// How a bound field's current value is obtained from an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Call the named parameter-less accessor method
    Accessor(String),
    /// Read the named publicly visible field directly
    Field(String),
}

/// A field together with its resolved read strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// The bound field's declaration
    pub field: FieldDescriptor,
    /// How to read the field's value
    pub strategy: ReadStrategy,
}

/// All readable field bindings of one record type.
///
/// Fields with no readable accessor are already excluded; they never
/// appear in any diff computed from this binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBinding {
    type_name: String,
    bindings: Vec<FieldBinding>,
}

impl TypeBinding {
    /// Name of the bound record type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The readable field bindings
    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }
}

/// Resolve the read strategy for a single field.
///
/// Preference order: `get` accessor, then (for boolean fields) `is`
/// accessor, then direct access for publicly readable storage. Returns
/// `None` when none of these apply; such fields are silently excluded
/// from every later diff.
pub fn bind_field(field: &FieldDescriptor, accessors: &AccessorTable) -> Option<ReadStrategy> {
    let core = accessor_core_name(&field.name);
    let getter = format!("get{core}");
    if accessors.contains(&getter) {
        return Some(ReadStrategy::Accessor(getter));
    }
    if field.category == ValueCategory::Boolean {
        let is_getter = format!("is{core}");
        if accessors.contains(&is_getter) {
            return Some(ReadStrategy::Accessor(is_getter));
        }
    }
    if field.publicly_readable {
        return Some(ReadStrategy::Field(field.name.clone()));
    }
    None
}

/// Bind every readable field of a type descriptor.
///
/// # Errors
///
/// `UnsupportedShape` - the descriptor does not name a recognizable
/// record type (blank `type_name`). Surfaced to the integrator before
/// any diff is attempted.
pub fn bind_type(descriptor: &TypeDescriptor) -> Result<TypeBinding> {
    if descriptor.type_name.trim().is_empty() {
        return Err(DiffError::UnsupportedShape {
            reason: "descriptor does not name a record type".to_string(),
        });
    }

    let mut bindings = Vec::with_capacity(descriptor.fields.len());
    for field in &descriptor.fields {
        match bind_field(field, &descriptor.accessors) {
            Some(strategy) => bindings.push(FieldBinding {
                field: field.clone(),
                strategy,
            }),
            None => {
                tracing::debug!(
                    type_name = %descriptor.type_name,
                    field = %field.name,
                    "field has no readable accessor; excluded from diffs"
                );
            }
        }
    }

    Ok(TypeBinding {
        type_name: descriptor.type_name.clone(),
        bindings,
    })
}
