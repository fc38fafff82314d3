//! Shared test fixtures.

use recdiff_core::{FieldDescriptor, FieldValue, Record, TypeDescriptor, ValueCategory};
use serde_json::json;
use std::collections::BTreeMap;

/// Nested reference type compared through value equality.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Inner {
    pub val: i64,
}

#[allow(dead_code)]
impl Inner {
    pub fn new(val: i64) -> Self {
        Self { val }
    }

    fn to_value(&self) -> FieldValue {
        json!({ "val": self.val })
    }
}

/// The canonical seven-field demo record.
///
/// Field naming deliberately exercises every resolver rule: a plain name,
/// an irregular `pStrVal`, an `is`-prefixed boolean, and the two-character
/// name `is`.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Demo {
    pub int_val: i64,
    pub str_val: String,
    pub inner: Option<Inner>,
    pub p_str_val: String,
    pub is_bool: bool,
    pub exist: bool,
    pub is: bool,
}

#[allow(dead_code)]
impl Demo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        int_val: i64,
        str_val: &str,
        inner: Option<Inner>,
        p_str_val: &str,
        is_bool: bool,
        exist: bool,
        is: bool,
    ) -> Self {
        Self {
            int_val,
            str_val: str_val.to_string(),
            inner,
            p_str_val: p_str_val.to_string(),
            is_bool,
            exist,
            is,
        }
    }
}

impl Record for Demo {
    fn type_name(&self) -> &str {
        "Demo"
    }

    fn call_accessor(&self, name: &str) -> Option<FieldValue> {
        match name {
            "getIntVal" => Some(json!(self.int_val)),
            "getStrVal" => Some(json!(self.str_val)),
            "getInner" => Some(
                self.inner
                    .as_ref()
                    .map_or(FieldValue::Null, Inner::to_value),
            ),
            "getpStrVal" => Some(json!(self.p_str_val)),
            "isBool" => Some(json!(self.is_bool)),
            "isExist" => Some(json!(self.exist)),
            "isIs" => Some(json!(self.is)),
            _ => None,
        }
    }

    fn read_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "pStrVal" => Some(json!(self.p_str_val)),
            _ => None,
        }
    }
}

/// Descriptor matching [`Demo`]'s declared fields and public accessors.
#[allow(dead_code)]
pub fn demo_descriptor() -> TypeDescriptor {
    TypeDescriptor::new("Demo")
        .with_field(FieldDescriptor::new("intVal", ValueCategory::Numeric))
        .with_field(FieldDescriptor::new("strVal", ValueCategory::Reference))
        .with_field(FieldDescriptor::new("inner", ValueCategory::Reference))
        .with_field(FieldDescriptor::new("pStrVal", ValueCategory::Reference).public())
        .with_field(FieldDescriptor::new("isBool", ValueCategory::Boolean))
        .with_field(FieldDescriptor::new("exist", ValueCategory::Boolean))
        .with_field(FieldDescriptor::new("is", ValueCategory::Boolean))
        .with_accessor("getIntVal")
        .with_accessor("getStrVal")
        .with_accessor("getInner")
        .with_accessor("getpStrVal")
        .with_accessor("isBool")
        .with_accessor("isExist")
        .with_accessor("isIs")
}

/// A record backed by plain maps, for shape-driven tests.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct MapRecord {
    type_name: String,
    accessors: BTreeMap<String, FieldValue>,
    fields: BTreeMap<String, FieldValue>,
}

#[allow(dead_code)]
impl MapRecord {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_accessor(mut self, name: &str, value: FieldValue) -> Self {
        self.accessors.insert(name.to_string(), value);
        self
    }

    pub fn with_field(mut self, name: &str, value: FieldValue) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }
}

impl Record for MapRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn call_accessor(&self, name: &str) -> Option<FieldValue> {
        self.accessors.get(name).cloned()
    }

    fn read_field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).cloned()
    }
}
