// Ownership suite: every stored payload is released exactly once.
//
// Each container holds clones of one shared `Rc<()>`. After every mutation
// the strong count must be 1 (the test's handle) plus the number of payloads
// still stored; after the container is dropped it must be exactly 1.
// - Replacing a value (put, set) releases the old payload.
// - Rejected inserts (duplicate BST value, full heap) release the argument.
// - Removal releases the unlinked node's payload and nothing else.
use scalar_collections::{BinarySearchTree, ChainTable, LinkedList, PriorityQueue, Queue, Stack};
use std::rc::Rc;

fn live(tracker: &Rc<()>) -> usize {
    Rc::strong_count(tracker) - 1
}

// Test: BST duplicate insert and Hibbard deletion of two-child nodes.
// Assumes: insert returns false for a value already present.
// Verifies: the rejected duplicate and each removed node are released once.
#[test]
fn bst_releases_removed_and_rejected_values() {
    let tracker = Rc::new(());
    let mut t = BinarySearchTree::new();
    for v in [50, 30, 70, 20, 40, 60, 80] {
        assert!(t.insert((v, Rc::clone(&tracker))));
    }
    assert_eq!(live(&tracker), 7);

    assert!(!t.insert((30, Rc::clone(&tracker))));
    assert_eq!(live(&tracker), 7);

    // 30 and then the root both have two children at removal time.
    for v in [30, 50] {
        let key = (v, Rc::clone(&tracker));
        assert!(t.remove(&key));
        drop(key);
    }
    assert_eq!(live(&tracker), 5);
    assert_eq!(t.len(), 5);
    let order: Vec<i32> = t.in_order().map(|(v, _)| *v).collect();
    assert_eq!(order, [20, 40, 60, 70, 80]);

    let absent = (99, Rc::clone(&tracker));
    assert!(!t.remove(&absent));
    drop(absent);
    assert_eq!(live(&tracker), 5);

    drop(t);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

// Test: positional set and remove on LinkedList.
// Verifies: `set` hands back the old payload; `remove` releases one node.
#[test]
fn linked_list_releases_replaced_and_removed_values() {
    let tracker = Rc::new(());
    let mut l = LinkedList::new();
    for _ in 0..3 {
        l.append(Rc::clone(&tracker));
    }
    l.prepend(Rc::clone(&tracker));
    l.insert(2, Rc::clone(&tracker)).expect("index within range");
    assert_eq!(live(&tracker), 5);

    let old = l.set(1, Rc::clone(&tracker)).expect("index within range");
    drop(old);
    assert_eq!(live(&tracker), 5);

    drop(l.remove(0).expect("index within range"));
    drop(l.remove(3).expect("index within range"));
    assert_eq!(live(&tracker), 3);
    assert!(l.remove(3).is_err());
    assert_eq!(live(&tracker), 3);

    drop(l);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

// Test: pop/dequeue hand ownership to the caller; the rest drops with the container.
#[test]
fn stack_and_queue_release_each_node_once() {
    let tracker = Rc::new(());
    let mut s = Stack::new();
    let mut q = Queue::new();
    for _ in 0..4 {
        s.push(Rc::clone(&tracker));
        q.enqueue(Rc::clone(&tracker));
    }
    assert_eq!(live(&tracker), 8);

    drop(s.pop());
    drop(q.dequeue());
    drop(q.dequeue());
    assert_eq!(live(&tracker), 5);

    q.enqueue(Rc::clone(&tracker));
    assert_eq!(live(&tracker), 6);

    drop(s);
    assert_eq!(live(&tracker), 3);
    drop(q);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

// Test: ChainTable put-replace, remove and growth.
// Assumes: 20 inserts from 16 buckets force at least one rehash.
// Verifies: rehash relinks without cloning or dropping payloads; replace and
// remove each release exactly the old value.
#[test]
fn chain_table_releases_replaced_and_removed_values() {
    let tracker = Rc::new(());
    let mut t: ChainTable<i32, Rc<()>> = ChainTable::new();
    for k in 0..20 {
        assert!(t.put(k, Rc::clone(&tracker)).is_none());
    }
    assert!(t.bucket_count() > 16);
    assert_eq!(live(&tracker), 20);

    let old = t.put(3, Rc::clone(&tracker)).expect("key present");
    drop(old);
    assert_eq!(live(&tracker), 20);

    for k in [0, 7, 19] {
        assert!(t.remove(&k).is_some());
    }
    assert!(t.remove(&7).is_none());
    assert_eq!(live(&tracker), 17);

    let copy = t.copy();
    assert_eq!(live(&tracker), 34);
    drop(t);
    assert_eq!(live(&tracker), 17);
    drop(copy);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

// Test: extract_max and rejected inserts on a bounded heap.
// Verifies: the rejected pair comes back to the caller and is not retained.
#[test]
fn priority_queue_releases_extracted_and_rejected_values() {
    let tracker = Rc::new(());
    let mut pq = PriorityQueue::bounded(4);
    for p in 0..4 {
        pq.insert(Rc::clone(&tracker), p).expect("below cap");
    }
    let err = pq
        .insert(Rc::clone(&tracker), 9)
        .expect_err("heap is full");
    assert_eq!(live(&tracker), 5);
    drop(err);
    assert_eq!(live(&tracker), 4);

    drop(pq.extract_max());
    assert_eq!(live(&tracker), 3);

    drop(pq);
    assert_eq!(Rc::strong_count(&tracker), 1);
}
