//! IntSet: integer membership on top of [`ChainTable`] with unit values.
//!
//! Members are bare `i32` keys; the set skips `Map`'s `Scalar` value cell.
//!
//! The set algebra (`union`, `intersection`, `difference`, ...) always
//! builds a new set and leaves both inputs untouched. Results hash their
//! members with `self`'s integer-hash policy.

use crate::hash::IntHash;
use crate::table::{ChainTable, TableConfig};

#[derive(Clone, Debug, Default)]
pub struct IntSet {
    table: ChainTable<i32, ()>,
}

impl IntSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            table: ChainTable::with_config(config),
        }
    }

    /// Integer-hash policy this set was built with.
    pub fn int_hash(&self) -> IntHash {
        self.table.hasher().int_hash()
    }

    // Empty set sharing `self`'s hasher.
    fn empty_like(&self) -> IntSet {
        Self {
            table: ChainTable::with_hasher(*self.table.hasher()),
        }
    }

    /// Returns true if `value` was not already present.
    pub fn add(&mut self, value: i32) -> bool {
        self.table.put(value, ()).is_none()
    }

    /// Returns true if `value` was present.
    pub fn remove(&mut self, value: i32) -> bool {
        self.table.remove(&value).is_some()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.table.contains_key(&value)
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

    /// Elements in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.table.keys().copied()
    }

    pub fn to_sorted_vec(&self) -> Vec<i32> {
        let mut v: Vec<i32> = self.iter().collect();
        v.sort_unstable();
        v
    }

    /// Every element of `self`, then every element of `other`.
    pub fn union(&self, other: &IntSet) -> IntSet {
        let mut out = self.empty_like();
        out.extend(self.iter());
        out.extend(other.iter());
        out
    }

    pub fn intersection(&self, other: &IntSet) -> IntSet {
        let mut out = self.empty_like();
        out.extend(self.iter().filter(|&v| other.contains(v)));
        out
    }

    pub fn difference(&self, other: &IntSet) -> IntSet {
        let mut out = self.empty_like();
        out.extend(self.iter().filter(|&v| !other.contains(v)));
        out
    }

    pub fn symmetric_difference(&self, other: &IntSet) -> IntSet {
        let mut out = self.difference(other);
        out.extend(other.iter().filter(|&v| !self.contains(v)));
        out
    }

    pub fn is_subset(&self, other: &IntSet) -> bool {
        self.len() <= other.len() && self.iter().all(|v| other.contains(v))
    }

    pub fn is_disjoint(&self, other: &IntSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().all(|v| !large.contains(v))
    }
}

impl Extend<i32> for IntSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl FromIterator<i32> for IntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut s = IntSet::new();
        s.extend(iter);
        s
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for IntSet {}
