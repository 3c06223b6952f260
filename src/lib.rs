//! scalar-collections: the in-process collection engine of a small language
//! runtime. A chained hash table with incremental growth, plus the set,
//! queue, stack, priority queue, linked list and binary search tree that
//! generated programs call into directly.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small set of single-owner containers whose invariants can be
//!   checked in isolation, with no unsafe code in the structures themselves.
//! - Layers:
//!   - ChainTable<K, V, S>: separate-chaining hash table. Entries live in a
//!     slot arena; buckets and `next` links are arena keys, not pointers.
//!   - Map / Record / IntSet: façades over ChainTable. Map and Record store
//!     tagged [`Scalar`] cells; IntSet stores integer keys with unit values.
//!   - Queue, Stack, PriorityQueue, LinkedList, BinarySearchTree: standalone
//!     containers that share the same ownership rules but not the table.
//!
//! Constraints
//! - Single owner: containers are not internally synchronized. They are
//!   `Send` when their payloads are, and `&mut self` enforces exclusive
//!   mutation.
//! - Copies are deep. `copy`, `merge` and the set algebra never alias
//!   entries between two live containers.
//! - No operation panics on bad input. Absent keys and empty containers
//!   yield `None`; bad indices and full bounded heaps yield `Err`.
//!
//! Hashing and growth
//! - Byte-string keys hash with djb2. Integer keys use a splitmix64 mix by
//!   default, or the identity hash via `IntHash::Identity`.
//! - The bucket index is `hash % bucket_count`. Tables start with 16 buckets
//!   and only grow, by doubling.
//! - The grow check runs before a new key is linked: when
//!   `len * 4 >= bucket_count * 3`, the table doubles first.
//! - Each entry caches its hash, so growth relinks entries without calling
//!   `K: Hash` again and without moving keys or values.
//! - If the doubled bucket array cannot be allocated, growth is skipped
//!   (logged at `warn`). The table stays correct at a higher load factor.
//!
//! Reentrancy
//! - ChainTable calls user code only through `K: Eq` and `K: Hash`. A
//!   debug-only guard panics if such code re-enters the same table. In
//!   release builds the guard compiles away.
//!
//! Recursion
//! - Stack, LinkedList and BinarySearchTree tear down with explicit loops,
//!   and the tree's insert, search and delete are iterative. Sorted input
//!   produces a degenerate tree but never a stack overflow.
//!
//! Logging
//! - Uses the `tracing` facade: `debug` for growth and rejected bounded-heap
//!   inserts, `warn` for abandoned growth. No subscriber is installed here.

pub mod bst;
pub mod hash;
pub mod linked_list;
pub mod map;
pub mod priority_queue;
pub mod queue;
mod reentrancy;
pub mod record;
pub mod set;
pub mod stack;
pub mod table;
mod table_proptest;
pub mod value;

// Public surface
pub use bst::BinarySearchTree;
pub use hash::{IntHash, RuntimeState};
pub use linked_list::{IndexError, LinkedList};
pub use map::Map;
pub use priority_queue::{CapacityError, HeapConfig, PriorityQueue, DEFAULT_CAPACITY};
pub use queue::Queue;
pub use record::Record;
pub use set::IntSet;
pub use stack::Stack;
pub use table::{ChainTable, TableConfig, TableStats, INITIAL_BUCKETS};
pub use value::{MapKey, Scalar, ScalarKind};
