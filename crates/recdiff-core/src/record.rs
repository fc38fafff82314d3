//! The consumed reflection interface.
//!
//! [`Record`] is the seam to the host runtime: the diff engine reads field
//! values exclusively through it, using the strategies resolved by the
//! accessor binder. Implementations are written by the integrator, either
//! by hand or by whatever derive machinery the host project carries.

use serde_json::Value;

/// A field value as read from a live instance.
///
/// `Value::Null` plays the role of the null reference.
pub type FieldValue = Value;

/// A live instance readable through a bound type descriptor.
pub trait Record {
    /// Name of the record type this instance belongs to
    fn type_name(&self) -> &str;

    /// Invoke the named public parameter-less accessor, if the instance has it
    fn call_accessor(&self, name: &str) -> Option<FieldValue>;

    /// Read the named publicly visible field's storage directly, if present
    fn read_field(&self, name: &str) -> Option<FieldValue>;
}
