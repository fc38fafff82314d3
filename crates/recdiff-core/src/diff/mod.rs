//! Field-level diff engine.
//!
//! Compares two instances of a bound record type field by field and
//! produces a [`ChangeSet`] mapping each changed field to its old/new pair.
//!
//! ## Entry point
//!
//! ```ignore
//! use recdiff_core::{bind_type, diff_records};
//!
//! let binding = bind_type(&descriptor)?;
//! let changes = diff_records(&binding, &old, &new)?;
//! let summary = recdiff_core::diff::summary::render_change_summary(binding.type_name(), &changes);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: the change set is keyed by a `BTreeMap`, so identical
//!   inputs serialize to byte-identical output.
//! - **Silent exclusion**: fields with no readable accessor never appear,
//!   regardless of their underlying storage.
//! - **Totality over data**: the engine never fails on field content; the
//!   only failure is a type mismatch between instances and binding.

pub mod engine;
pub mod model;
pub mod summary;

pub use engine::diff_records;
pub use model::{Change, ChangeSet};
pub use summary::render_change_summary;
