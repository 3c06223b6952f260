//! Bucket hash functions used by the runtime tables.
//!
//! Byte strings hash with djb2 (`h = h * 33 + byte`, seed 5381). Integer
//! keys either pass through unchanged (`IntHash::Identity`, the legacy
//! placement) or go through a splitmix64 finalizer (`IntHash::Mixed`,
//! the default) so sequential keys do not cluster modulo the bucket count.

use core::hash::{BuildHasher, Hasher};

const DJB2_SEED: u64 = 5381;

/// How integer keys are turned into bucket hashes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum IntHash {
    /// `hash(k) == k as u32`. Sequential keys land in sequential buckets.
    Identity,
    /// splitmix64 finalizer over the key.
    #[default]
    Mixed,
}

/// `BuildHasher` for [`RuntimeHasher`]. Deterministic: no per-instance seed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RuntimeState {
    int_hash: IntHash,
}

impl RuntimeState {
    pub const fn new(int_hash: IntHash) -> Self {
        Self { int_hash }
    }

    pub fn int_hash(&self) -> IntHash {
        self.int_hash
    }
}

impl BuildHasher for RuntimeState {
    type Hasher = RuntimeHasher;

    fn build_hasher(&self) -> Self::Hasher {
        RuntimeHasher {
            state: DJB2_SEED,
            int_hash: self.int_hash,
            fresh: true,
        }
    }
}

/// djb2 over bytes; integer writes follow the configured [`IntHash`].
#[derive(Clone, Debug)]
pub struct RuntimeHasher {
    state: u64,
    int_hash: IntHash,
    // No bytes written yet. Lets a lone integer key hash to itself.
    fresh: bool,
}

impl RuntimeHasher {
    #[inline]
    fn djb2(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = self
                .state
                .wrapping_shl(5)
                .wrapping_add(self.state)
                .wrapping_add(u64::from(b));
        }
    }
}

impl Hasher for RuntimeHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.djb2(bytes);
        self.fresh = false;
    }

    #[inline]
    fn write_i32(&mut self, v: i32) {
        let x = u64::from(v as u32);
        match self.int_hash {
            IntHash::Identity if self.fresh => self.state = x,
            IntHash::Identity => self.djb2(&v.to_le_bytes()),
            IntHash::Mixed => self.state = splitmix64(self.state ^ x),
        }
        self.fresh = false;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Final avalanche step of splitmix64.
#[inline]
pub fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
