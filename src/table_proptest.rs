#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can reach the
// chain layout through `stats()` and use custom hashers freely.

use crate::hash::{IntHash, RuntimeState};
use crate::table::ChainTable;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations shrink toward earlier keys and shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            8 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Put(i, v)),
            3 => idx.clone().prop_map(Op::Remove),
            3 => idx.clone().prop_map(Op::Get),
            2 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(Op::Contains),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => Just(Op::Iterate),
            1 => Just(Op::Clear),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Drives `sut` and a std HashMap model through the same operations and checks
// parity plus the structural invariants after each step:
// - len equals the number of entries reachable through the chains;
// - the load factor never exceeds 0.75 by more than the single entry linked
//   after the pre-insert grow check;
// - bucket counts never shrink (clear keeps them).
fn run_state_machine<S>(
    mut sut: ChainTable<String, i32, S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError>
where
    S: BuildHasher,
{
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut buckets = sut.bucket_count();

    for op in ops {
        match op {
            Op::Put(i, v) => {
                let k = pool[i].clone();
                let prev = sut.put(k.clone(), v);
                prop_assert_eq!(prev, model.insert(k, v));
            }
            Op::Remove(i) => {
                let k = &pool[i];
                let got = sut.remove(k.as_str());
                let want = model.remove(k).map(|v| (k.clone(), v));
                prop_assert_eq!(got, want);
            }
            Op::Get(i) => {
                let k = pool[i].as_str();
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            Op::Contains(s) => {
                prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
            }
            Op::Mutate(i, d) => {
                let k = pool[i].as_str();
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(a), Some(b)) => {
                        *a = a.wrapping_add(d);
                        *b = b.wrapping_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "get_mut presence differs from model"),
                }
            }
            Op::Iterate => {
                let s: BTreeMap<_, _> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                let m: BTreeMap<_, _> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(s, m);
            }
            Op::Clear => {
                sut.clear();
                model.clear();
            }
        }

        let stats = sut.stats();
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(stats.len, sut.iter().count());
        prop_assert!(stats.bucket_count >= buckets, "bucket count shrank");
        prop_assert!(
            sut.len() * 4 <= sut.bucket_count() * 3 + 4,
            "load factor overshoot: {} entries in {} buckets",
            sut.len(),
            sut.bucket_count()
        );
        buckets = stats.bucket_count;
    }

    let keys: BTreeSet<_> = sut.keys().cloned().collect();
    let model_keys: BTreeSet<_> = model.keys().cloned().collect();
    prop_assert_eq!(keys, model_keys);
    Ok(())
}

#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    // Property: state-machine equivalence with the default runtime hasher.
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine(ChainTable::new(), &pool, ops)?;
    }

    // Property: same invariants with every key in one chain, which stresses
    // head/middle/tail unlinking and growth of a single long chain.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_state_machine(ChainTable::with_hasher(ConstBuildHasher), &pool, ops)?;
    }

    // Property: integer keys under both integer hash policies agree with a
    // model, and the identity policy never puts two keys below the bucket
    // count into the same chain.
    #[test]
    fn prop_int_keys_under_both_policies(keys in proptest::collection::vec(0i32..4096, 0..200)) {
        for policy in [IntHash::Identity, IntHash::Mixed] {
            let mut t: ChainTable<i32, i32, RuntimeState> =
                ChainTable::with_hasher(RuntimeState::new(policy));
            let mut model = HashMap::new();
            for &k in &keys {
                prop_assert_eq!(t.put(k, k * 2), model.insert(k, k * 2));
            }
            prop_assert_eq!(t.len(), model.len());
            for (k, v) in &model {
                prop_assert_eq!(t.get(k), Some(v));
            }
            if policy == IntHash::Identity && keys.iter().all(|&k| (k as usize) < t.bucket_count()) {
                prop_assert!(t.stats().longest_chain <= 1);
            }
        }
    }
}
