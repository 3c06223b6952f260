// Property tests for the containers against std models.
//
// Invariants exercised across random operation sequences:
// - IntSet algebra agrees with BTreeSet and never mutates its inputs.
// - PriorityQueue extraction yields priorities in non-increasing order and
//   matches a sorted model's multiset of priorities.
// - BinarySearchTree membership, len and in-order output agree with a
//   BTreeSet under interleaved insert/remove.
// - LinkedList positional operations agree with Vec, including rejections.
// - Queue and Stack agree with VecDeque used at the matching ends.
use proptest::prelude::*;
use scalar_collections::{BinarySearchTree, IntSet, LinkedList, PriorityQueue, Queue, Stack};
use std::collections::{BTreeSet, VecDeque};

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-50i32..50, 0..60)
}

#[derive(Clone, Debug)]
enum TreeOp {
    Insert(i16),
    Remove(i16),
}

fn tree_ops() -> impl Strategy<Value = Vec<TreeOp>> {
    let op = prop_oneof![
        3 => (-40i16..40).prop_map(TreeOp::Insert),
        2 => (-40i16..40).prop_map(TreeOp::Remove),
    ];
    proptest::collection::vec(op, 0..200)
}

#[derive(Clone, Debug)]
enum ListOp {
    Append(u8),
    Prepend(u8),
    Insert(usize, u8),
    Remove(usize),
    Set(usize, u8),
    Get(usize),
}

fn list_ops() -> impl Strategy<Value = Vec<ListOp>> {
    let op = prop_oneof![
        any::<u8>().prop_map(ListOp::Append),
        any::<u8>().prop_map(ListOp::Prepend),
        (0usize..12, any::<u8>()).prop_map(|(i, v)| ListOp::Insert(i, v)),
        (0usize..12).prop_map(ListOp::Remove),
        (0usize..12, any::<u8>()).prop_map(|(i, v)| ListOp::Set(i, v)),
        (0usize..12).prop_map(ListOp::Get),
    ];
    proptest::collection::vec(op, 0..100)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_set_algebra_matches_btreeset(a in small_ints(), b in small_ints()) {
        let sa: IntSet = a.iter().copied().collect();
        let sb: IntSet = b.iter().copied().collect();
        let ma: BTreeSet<i32> = a.iter().copied().collect();
        let mb: BTreeSet<i32> = b.iter().copied().collect();

        let sorted = |s: &BTreeSet<i32>| s.iter().copied().collect::<Vec<_>>();
        prop_assert_eq!(sa.union(&sb).to_sorted_vec(), sorted(&ma.union(&mb).copied().collect()));
        prop_assert_eq!(sa.intersection(&sb).to_sorted_vec(), sorted(&ma.intersection(&mb).copied().collect()));
        prop_assert_eq!(sa.difference(&sb).to_sorted_vec(), sorted(&ma.difference(&mb).copied().collect()));
        prop_assert_eq!(
            sa.symmetric_difference(&sb).to_sorted_vec(),
            sorted(&ma.symmetric_difference(&mb).copied().collect())
        );
        prop_assert_eq!(sa.is_subset(&sb), ma.is_subset(&mb));
        prop_assert_eq!(sa.is_disjoint(&sb), ma.is_disjoint(&mb));

        // Inputs untouched.
        prop_assert_eq!(sa.to_sorted_vec(), sorted(&ma));
        prop_assert_eq!(sb.to_sorted_vec(), sorted(&mb));
    }

    #[test]
    fn prop_heap_extracts_non_increasing(pairs in proptest::collection::vec((any::<u16>(), 0u8..20), 0..300)) {
        let mut pq = PriorityQueue::new();
        for &(e, p) in &pairs {
            pq.insert(e, p).unwrap();
        }
        prop_assert_eq!(pq.len(), pairs.len());

        let mut model: Vec<u8> = pairs.iter().map(|&(_, p)| p).collect();
        model.sort_unstable_by(|a, b| b.cmp(a));

        let mut got = Vec::new();
        while let Some((_, p)) = pq.extract_max_with_priority() {
            got.push(p);
        }
        prop_assert_eq!(got, model);
        prop_assert!(pq.is_empty());
    }

    #[test]
    fn prop_bounded_heap_never_exceeds_cap(cap in 0usize..16, prios in proptest::collection::vec(any::<i32>(), 0..40)) {
        let mut pq = PriorityQueue::bounded(cap);
        let mut accepted = 0usize;
        for (i, &p) in prios.iter().enumerate() {
            let before = pq.peek_priority().copied();
            match pq.insert(i, p) {
                Ok(()) => accepted += 1,
                Err(e) => {
                    prop_assert_eq!(e.into_inner(), (i, p));
                    prop_assert_eq!(pq.peek_priority().copied(), before);
                }
            }
            prop_assert!(pq.len() <= cap);
        }
        prop_assert_eq!(accepted, prios.len().min(cap));
    }

    #[test]
    fn prop_bst_matches_btreeset(ops in tree_ops()) {
        let mut sut = BinarySearchTree::new();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                TreeOp::Insert(v) => {
                    prop_assert_eq!(sut.insert(v), model.insert(v));
                }
                TreeOp::Remove(v) => {
                    prop_assert_eq!(sut.remove(&v), model.remove(&v));
                }
            }
            prop_assert_eq!(sut.len(), model.len());
        }
        let in_order: Vec<i16> = sut.in_order().copied().collect();
        let expected: Vec<i16> = model.iter().copied().collect();
        prop_assert_eq!(in_order, expected);
        for v in -40i16..40 {
            prop_assert_eq!(sut.search(&v), model.contains(&v));
        }
        prop_assert_eq!(sut.min(), model.first());
        prop_assert_eq!(sut.max(), model.last());
    }

    #[test]
    fn prop_linked_list_matches_vec(ops in list_ops()) {
        let mut sut = LinkedList::new();
        let mut model: Vec<u8> = Vec::new();
        for op in ops {
            match op {
                ListOp::Append(v) => {
                    sut.append(v);
                    model.push(v);
                }
                ListOp::Prepend(v) => {
                    sut.prepend(v);
                    model.insert(0, v);
                }
                ListOp::Insert(i, v) => {
                    let ok = sut.insert(i, v).is_ok();
                    prop_assert_eq!(ok, i <= model.len());
                    if ok {
                        model.insert(i, v);
                    }
                }
                ListOp::Remove(i) => {
                    let got = sut.remove(i).ok();
                    let want = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(got, want);
                }
                ListOp::Set(i, v) => {
                    let got = sut.set(i, v).ok();
                    let want = model.get_mut(i).map(|slot| std::mem::replace(slot, v));
                    prop_assert_eq!(got, want);
                }
                ListOp::Get(i) => {
                    prop_assert_eq!(sut.get(i), model.get(i));
                }
            }
            prop_assert_eq!(sut.len(), model.len());
        }
        prop_assert_eq!(sut.iter().copied().collect::<Vec<_>>(), model);
    }

    #[test]
    fn prop_queue_and_stack_match_vecdeque(ops in proptest::collection::vec(proptest::option::of(any::<i32>()), 0..150)) {
        let mut q = Queue::new();
        let mut s = Stack::new();
        let mut fifo = VecDeque::new();
        let mut lifo = VecDeque::new();
        for op in ops {
            match op {
                Some(v) => {
                    q.enqueue(v);
                    s.push(v);
                    fifo.push_back(v);
                    lifo.push_back(v);
                }
                None => {
                    prop_assert_eq!(q.dequeue(), fifo.pop_front());
                    prop_assert_eq!(s.pop(), lifo.pop_back());
                }
            }
            prop_assert_eq!(q.peek(), fifo.front());
            prop_assert_eq!(s.peek(), lifo.back());
            prop_assert_eq!(q.len(), fifo.len());
            prop_assert_eq!(s.len(), lifo.len());
        }
    }
}
