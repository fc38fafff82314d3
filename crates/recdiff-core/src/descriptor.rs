//! Record type descriptors.
//!
//! A [`TypeDescriptor`] is the introspected shape of a record type: its
//! declared fields and the names of its public, parameter-less,
//! value-returning accessor methods. Descriptors are supplied by the
//! integrator (the stand-in for a host reflection facility) and consumed
//! by the accessor binder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Value-category of a declared field.
///
/// The category decides both the comparison policy (raw equality for the
/// value-like categories, null-aware value equality for references) and,
/// for booleans, the `is`-accessor fallback during binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueCategory {
    /// Boolean primitive; compared by raw equality, eligible for `is` accessors
    Boolean,
    /// Numeric or other non-boolean primitive; compared by raw equality
    Numeric,
    /// Reference value; compared through the null-aware equality rule
    Reference,
}

impl ValueCategory {
    /// True for categories compared by raw value equality
    pub fn is_value(self) -> bool {
        matches!(self, ValueCategory::Boolean | ValueCategory::Numeric)
    }
}

/// A declared field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Declared field name, exactly as the host type spells it
    pub name: String,
    /// Value category driving comparison and binding
    pub category: ValueCategory,
    /// True when the field's storage is publicly readable without an accessor
    pub publicly_readable: bool,
}

impl FieldDescriptor {
    /// Create a non-public field descriptor
    pub fn new(name: impl Into<String>, category: ValueCategory) -> Self {
        Self {
            name: name.into(),
            category,
            publicly_readable: false,
        }
    }

    /// Mark the field's storage as publicly readable
    pub fn public(mut self) -> Self {
        self.publicly_readable = true;
        self
    }
}

/// The set of public accessor method names of a record type.
///
/// Built once per type. Only membership is consulted; no invocation
/// metadata is carried beyond the name itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorTable {
    names: BTreeSet<String>,
}

impl AccessorTable {
    /// Create an empty accessor table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accessor method name
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Check whether an accessor with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of recorded accessor names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AccessorTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Introspected shape of a record type: fields plus accessor names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Name of the record type
    pub type_name: String,
    /// Declared fields, in stable declaration order
    pub fields: Vec<FieldDescriptor>,
    /// Public accessor method names
    pub accessors: AccessorTable,
}

impl TypeDescriptor {
    /// Create a descriptor with no fields or accessors
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            accessors: AccessorTable::new(),
        }
    }

    /// Add a field declaration
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a public accessor method name
    pub fn with_accessor(mut self, name: impl Into<String>) -> Self {
        self.accessors.insert(name);
        self
    }
}
