//! Map: scalar-typed façade over [`ChainTable`].
//!
//! Keys are integers or byte strings; values are any [`Scalar`]. Lookups
//! return `Option` so an absent key is never confused with a stored zero.
//! `get_or_zero` keeps the old "type default on miss" contract for callers
//! that want it.

use crate::table::{ChainTable, TableConfig, TableStats};
use crate::value::{MapKey, Scalar, ScalarKind};

#[derive(Clone, Debug, Default)]
pub struct Map {
    table: ChainTable<MapKey, Scalar>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            table: ChainTable::with_config(config),
        }
    }

    /// Insert or overwrite; returns the previous value for `key`.
    pub fn put(&mut self, key: impl Into<MapKey>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.table.put(key.into(), value.into())
    }

    pub fn get(&self, key: impl Into<MapKey>) -> Option<&Scalar> {
        self.table.get(&key.into())
    }

    pub fn get_int(&self, key: impl Into<MapKey>) -> Option<i32> {
        self.get(key).and_then(Scalar::as_int)
    }

    pub fn get_float(&self, key: impl Into<MapKey>) -> Option<f64> {
        self.get(key).and_then(Scalar::as_float)
    }

    pub fn get_bool(&self, key: impl Into<MapKey>) -> Option<bool> {
        self.get(key).and_then(Scalar::as_bool)
    }

    pub fn get_bytes(&self, key: impl Into<MapKey>) -> Option<&[u8]> {
        self.get(key).and_then(Scalar::as_bytes)
    }

    pub fn get_str(&self, key: impl Into<MapKey>) -> Option<&str> {
        self.get(key).and_then(Scalar::as_str)
    }

    /// Stored value when present with the requested kind, else `Scalar::zero(kind)`.
    pub fn get_or_zero(&self, key: impl Into<MapKey>, kind: ScalarKind) -> Scalar {
        match self.get(key) {
            Some(v) if v.kind() == kind => v.clone(),
            _ => Scalar::zero(kind),
        }
    }

    pub fn contains(&self, key: impl Into<MapKey>) -> bool {
        self.table.contains_key(&key.into())
    }

    /// Remove `key`, returning its value if it was present.
    pub fn delete(&mut self, key: impl Into<MapKey>) -> Option<Scalar> {
        self.table.remove(&key.into()).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &MapKey> + '_ {
        self.table.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &Scalar)> + '_ {
        self.table.iter()
    }

    pub fn copy(&self) -> Self {
        Self {
            table: self.table.copy(),
        }
    }

    /// New map holding `first`'s entries overwritten by `second`'s.
    pub fn merge(first: &Map, second: &Map) -> Self {
        Self {
            table: ChainTable::merge(&first.table, &second.table),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<MapKey>,
    V: Into<Scalar>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Map::new();
        for (k, v) in iter {
            m.put(k, v);
        }
        m
    }
}
