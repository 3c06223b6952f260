//! Record: named scalar fields, the runtime's struct value.

use crate::table::ChainTable;
use crate::value::Scalar;
use core::hash::{Hash, Hasher};

/// Field-name key. Hashes the raw name bytes through `Hasher::write`, with no
/// `str` terminator byte, so names hash as plain djb2.
#[derive(Clone, Debug, Eq, PartialEq)]
struct FieldName(Box<str>);

impl Hash for FieldName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.0.as_bytes());
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        FieldName(name.into())
    }
}

/// Field name to scalar value. Field values are never containers.
#[derive(Clone, Debug, Default)]
pub struct Record {
    fields: ChainTable<FieldName, Scalar>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, returning the previous value of that field.
    pub fn set_field(&mut self, name: &str, value: impl Into<Scalar>) -> Option<Scalar> {
        self.fields.put(name.into(), value.into())
    }

    pub fn set_int(&mut self, name: &str, value: i32) -> Option<Scalar> {
        self.set_field(name, value)
    }

    pub fn set_float(&mut self, name: &str, value: f64) -> Option<Scalar> {
        self.set_field(name, value)
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Option<Scalar> {
        self.set_field(name, value)
    }

    pub fn set_str(&mut self, name: &str, value: &str) -> Option<Scalar> {
        self.set_field(name, value)
    }

    pub fn field(&self, name: &str) -> Option<&Scalar> {
        self.fields.get(&FieldName::from(name))
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        self.field(name).and_then(Scalar::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(Scalar::as_float)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(Scalar::as_bool)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Scalar::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(&FieldName::from(name))
    }

    pub fn remove_field(&mut self, name: &str) -> Option<Scalar> {
        self.fields.remove(&FieldName::from(name)).map(|(_, v)| v)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Scalar)> + '_ {
        self.fields.iter().map(|(k, v)| (&*k.0, v))
    }
}
