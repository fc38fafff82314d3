//! Diff computation engine.
//!
//! The core entry point is [`diff_records`], which reads both instances
//! through a precomputed [`TypeBinding`] and assembles a [`ChangeSet`].

use crate::binder::{ReadStrategy, TypeBinding};
use crate::diff::model::{Change, ChangeSet};
use crate::errors::{DiffError, Result};
use crate::record::{FieldValue, Record};

/// Compare two instances of the bound record type field by field.
///
/// Reads each readable field from both instances, applies the per-category
/// comparison policy, and returns the assembled change mapping. A single
/// synchronous pure pass; safe to call concurrently on shared bindings.
///
/// # Errors
///
/// `TypeMismatch` - either instance does not report the bound type name.
/// No partial change set is returned in that case.
pub fn diff_records(
    binding: &TypeBinding,
    old_instance: &dyn Record,
    new_instance: &dyn Record,
) -> Result<ChangeSet> {
    check_instance_type("old", binding.type_name(), old_instance)?;
    check_instance_type("new", binding.type_name(), new_instance)?;

    let mut changes = ChangeSet::new();
    for bound in binding.bindings() {
        let old_value = read_value(old_instance, &bound.strategy);
        let new_value = read_value(new_instance, &bound.strategy);

        let changed = if bound.field.category.is_value() {
            old_value != new_value
        } else {
            reference_changed(&old_value, &new_value)
        };

        if changed {
            changes.insert(
                bound.field.name.clone(),
                Change {
                    old: old_value,
                    new: new_value,
                },
            );
        }
    }

    tracing::trace!(
        type_name = %binding.type_name(),
        changed_fields = changes.len(),
        "diff computed"
    );
    Ok(changes)
}

/// Verify an instance belongs to the bound record type.
fn check_instance_type(
    which: &'static str,
    expected: &str,
    instance: &dyn Record,
) -> Result<()> {
    let actual = instance.type_name();
    if actual != expected {
        return Err(DiffError::TypeMismatch {
            which,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Read one field value through its bound strategy.
///
/// A read the instance cannot satisfy yields null, keeping the engine
/// total over data content.
fn read_value(instance: &dyn Record, strategy: &ReadStrategy) -> FieldValue {
    match strategy {
        ReadStrategy::Accessor(name) => instance.call_accessor(name),
        ReadStrategy::Field(name) => instance.read_field(name),
    }
    .unwrap_or(FieldValue::Null)
}

/// Null-aware comparison for reference fields.
///
/// Mirrors calling the old value's equality method against the new value.
/// The operand order is part of the contract: old-null/new-non-null is
/// checked first, then the old side's equality covers the remaining cases
/// (including new-null, which compares unequal to any non-null old value).
fn reference_changed(old_value: &FieldValue, new_value: &FieldValue) -> bool {
    if old_value.is_null() {
        !new_value.is_null()
    } else {
        old_value != new_value
    }
}
