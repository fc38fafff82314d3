//! recdiff registry - runtime differ registration
//!
//! Provides the declarative registration surface over the core diff
//! engine: a caller-owned [`DifferRegistry`] binds a differ per record
//! type once, caches the accessor bindings, and dispatches diff calls by
//! instance type name. This is the runtime equivalent of generating a
//! dedicated differ per declared type.

pub mod registry;

pub use registry::{BoundDiffer, Describe, DifferRegistry};
