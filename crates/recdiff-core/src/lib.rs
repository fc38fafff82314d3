//! recdiff core - field-level record diffing
//!
//! This crate computes a structural difference between two instances of the
//! same record type: for every field whose value changed between an "old"
//! and a "new" instance, the result maps the field name to its old/new pair.
//! The output is suitable for audit logs, change-tracking, and event payloads.
//!
//! The crate provides:
//! - Type descriptor model (fields, value categories, accessor table)
//! - Accessor name resolution following bean-style naming conventions
//! - Accessor binding (named accessor call, direct field read, or skip)
//! - A pure, synchronous diff engine with null-aware reference comparison
//! - Change/ChangeSet output types with deterministic serialization
//! - A human-readable change summary renderer

pub mod binder;
pub mod descriptor;
pub mod diff;
pub mod errors;
pub mod logging;
pub mod record;
pub mod resolver;

// Re-export commonly used types
pub use binder::{bind_field, bind_type, FieldBinding, ReadStrategy, TypeBinding};
pub use descriptor::{AccessorTable, FieldDescriptor, TypeDescriptor, ValueCategory};
pub use diff::engine::diff_records;
pub use diff::model::{Change, ChangeSet};
pub use errors::{DiffError, Result};
pub use record::{FieldValue, Record};
