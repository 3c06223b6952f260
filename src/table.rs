//! ChainTable: separate-chaining hash table over a slot arena.
//!
//! Buckets hold the arena key of their chain head; each entry links to the
//! next entry in the same bucket. Entries never move in the arena, so a
//! rehash only rewrites `next` links and bucket heads.

use crate::hash::{IntHash, RuntimeState};
use crate::reentrancy::DebugReentrancy;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, warn};

/// Bucket count of a freshly created table.
pub const INITIAL_BUCKETS: usize = 16;

new_key_type! {
    struct EntryKey;
}

#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
    next: Option<EntryKey>,
}

/// Construction options for [`ChainTable`] and the façades built on it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConfig {
    /// Starting bucket count; clamped to at least 1.
    pub initial_buckets: usize,
    /// Hash applied to integer keys.
    pub int_hash: IntHash,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_buckets: INITIAL_BUCKETS,
            int_hash: IntHash::default(),
        }
    }
}

/// Snapshot of the chain layout, mostly for diagnostics and tests.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableStats {
    pub len: usize,
    pub bucket_count: usize,
    pub used_buckets: usize,
    pub longest_chain: usize,
}

pub struct ChainTable<K, V, S = RuntimeState> {
    hasher: S,
    initial_buckets: usize,
    buckets: Vec<Option<EntryKey>>,
    slots: SlotMap<EntryKey, Entry<K, V>>,
    guard: DebugReentrancy,
}

impl<K, V> ChainTable<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self::with_buckets_and_hasher(config.initial_buckets, RuntimeState::new(config.int_hash))
    }
}

impl<K, V> Default for ChainTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_buckets_and_hasher(INITIAL_BUCKETS, hasher)
    }

    pub fn with_buckets_and_hasher(initial_buckets: usize, hasher: S) -> Self {
        let initial_buckets = initial_buckets.max(1);
        Self {
            hasher,
            initial_buckets,
            buckets: vec![None; initial_buckets],
            slots: SlotMap::with_key(),
            guard: DebugReentrancy::new(),
        }
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.bucket_count() as f64
    }

    #[inline]
    fn bucket_of(hash: u64, bucket_count: usize) -> usize {
        (hash % bucket_count as u64) as usize
    }

    // Walks one chain. Only `K: Eq` runs here.
    fn find_in_chain<Q>(&self, hash: u64, q: &Q) -> Option<EntryKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cur = self.buckets[Self::bucket_of(hash, self.buckets.len())];
        while let Some(k) = cur {
            let e = &self.slots[k];
            if e.hash == hash && e.key.borrow() == q {
                return Some(k);
            }
            cur = e.next;
        }
        None
    }

    /// Insert or replace. Returns the displaced value when `key` was present;
    /// the entry count is unchanged in that case.
    ///
    /// The grow check runs before a new entry is linked, so the table
    /// doubles when `len * 4 >= bucket_count * 3` at insertion time.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let _g = self.guard.enter("put");
        let hash = self.hasher.hash_one(&key);
        if let Some(k) = self.find_in_chain(hash, &key) {
            return Some(core::mem::replace(&mut self.slots[k].value, value));
        }
        if self.len() * 4 >= self.buckets.len() * 3 {
            Self::grow(&mut self.buckets, &mut self.slots);
        }
        let idx = Self::bucket_of(hash, self.buckets.len());
        let next = self.buckets[idx];
        let k = self.slots.insert(Entry {
            key,
            value,
            hash,
            next,
        });
        self.buckets[idx] = Some(k);
        None
    }

    // Doubles the bucket array and relinks every entry by its cached hash.
    // If the new array cannot be allocated the table keeps its old buckets.
    fn grow(buckets: &mut Vec<Option<EntryKey>>, slots: &mut SlotMap<EntryKey, Entry<K, V>>) {
        let from = buckets.len();
        let Some(to) = from.checked_mul(2) else {
            warn!(buckets = from, "chain table at maximum bucket count; not growing");
            return;
        };
        let mut fresh: Vec<Option<EntryKey>> = Vec::new();
        if let Err(err) = fresh.try_reserve_exact(to) {
            warn!(from, to, len = slots.len(), %err, "chain table rehash abandoned");
            return;
        }
        fresh.resize(to, None);
        for &head in buckets.iter() {
            let mut cur = head;
            while let Some(k) = cur {
                let e = &mut slots[k];
                cur = e.next;
                let idx = Self::bucket_of(e.hash, to);
                e.next = fresh[idx];
                fresh[idx] = Some(k);
            }
        }
        *buckets = fresh;
        debug!(from, to, len = slots.len(), "chain table rehashed");
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter("get");
        let hash = self.hasher.hash_one(q);
        let k = self.find_in_chain(hash, q)?;
        Some(&self.slots[k].value)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter("get_mut");
        let hash = self.hasher.hash_one(q);
        let k = self.find_in_chain(hash, q)?;
        self.slots.get_mut(k).map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter("contains_key");
        let hash = self.hasher.hash_one(q);
        self.find_in_chain(hash, q).is_some()
    }

    /// Unlink and return the entry for `q`. The bucket count never shrinks.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter("remove");
        let hash = self.hasher.hash_one(q);
        let idx = Self::bucket_of(hash, self.buckets.len());
        let mut prev: Option<EntryKey> = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            let e = &self.slots[k];
            let next = e.next;
            if e.hash == hash && e.key.borrow() == q {
                match prev {
                    None => self.buckets[idx] = next,
                    Some(p) => self.slots[p].next = next,
                }
                let e = self.slots.remove(k)?;
                return Some((e.key, e.value));
            }
            prev = cur;
            cur = next;
        }
        None
    }

    /// Drop every entry; the bucket count is kept.
    pub fn clear(&mut self) {
        let _g = self.guard.enter("clear");
        self.slots.clear();
        self.buckets.fill(None);
    }

    /// Entries in bucket order, each chain head first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            slots: &self.slots,
            cur: None,
            remaining: self.slots.len(),
        }
    }

    /// Mutable values in arena order (not bucket order).
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            it: self.slots.values_mut(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn stats(&self) -> TableStats {
        let mut used_buckets = 0;
        let mut longest_chain = 0;
        for &head in &self.buckets {
            let mut n = 0;
            let mut cur = head;
            while let Some(k) = cur {
                n += 1;
                cur = self.slots[k].next;
            }
            if n > 0 {
                used_buckets += 1;
            }
            longest_chain = longest_chain.max(n);
        }
        TableStats {
            len: self.len(),
            bucket_count: self.bucket_count(),
            used_buckets,
            longest_chain,
        }
    }
}

impl<K, V, S> ChainTable<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Deep copy: walks every chain and re-inserts into a fresh table with
    /// the same starting configuration.
    pub fn copy(&self) -> Self {
        let mut out = Self::with_buckets_and_hasher(self.initial_buckets, self.hasher.clone());
        for (k, v) in self.iter() {
            out.put(k.clone(), v.clone());
        }
        out
    }

    /// Copy of `first` with every entry of `second` put on top; `second`
    /// wins on key conflicts.
    pub fn merge(first: &Self, second: &Self) -> Self {
        let mut out = first.copy();
        for (k, v) in second.iter() {
            out.put(k.clone(), v.clone());
        }
        out
    }
}

impl<K, V, S> Clone for ChainTable<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<K, V, S> Extend<(K, V)> for ChainTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut t = Self::with_hasher(S::default());
        t.extend(iter);
        t
    }
}

impl<K, V, S> fmt::Debug for ChainTable<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let it = Iter {
            buckets: self.buckets.iter(),
            slots: &self.slots,
            cur: None,
            remaining: self.slots.len(),
        };
        f.debug_map().entries(it).finish()
    }
}

/// Iterator over `(&K, &V)` in bucket order.
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Option<EntryKey>>,
    slots: &'a SlotMap<EntryKey, Entry<K, V>>,
    cur: Option<EntryKey>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cur {
                let e = &self.slots[k];
                self.cur = e.next;
                self.remaining -= 1;
                return Some((&e.key, &e.value));
            }
            self.cur = *self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` in arena order.
pub struct IterMut<'a, K, V> {
    it: slotmap::basic::ValuesMut<'a, EntryKey, Entry<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| (&e.key, &mut e.value))
    }
}
