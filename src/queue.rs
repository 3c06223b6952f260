//! Queue: FIFO chain of nodes stored in a slot arena.
//!
//! `front` and `rear` are arena keys, so both ends are O(1) without raw
//! pointers. Each node links to the one enqueued after it.

use core::fmt;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct NodeKey;
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeKey>,
}

#[derive(Clone)]
pub struct Queue<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    front: Option<NodeKey>,
    rear: Option<NodeKey>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            front: None,
            rear: None,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let k = self.nodes.insert(Node { value, next: None });
        match self.rear {
            Some(r) => self.nodes[r].next = Some(k),
            None => self.front = Some(k),
        }
        self.rear = Some(k);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        let k = self.front?;
        let node = self.nodes.remove(k)?;
        self.front = node.next;
        if self.front.is_none() {
            self.rear = None;
        }
        Some(node.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.front.map(|k| &self.nodes[k].value)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let k = self.front?;
        self.nodes.get_mut(k).map(|n| &mut n.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dequeues until empty.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
    }

    /// Front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: self.front,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.enqueue(v);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Queue::new();
        q.extend(iter);
        q
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    cur: Option<NodeKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cur?];
        self.cur = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
    }

    /// Invariant: draining to empty resets both ends so the next enqueue is
    /// both front and rear.
    #[test]
    fn refill_after_drain() {
        let mut q: Queue<i32> = (0..3).collect();
        q.clear();
        assert!(q.is_empty());
        q.enqueue(9);
        q.enqueue(10);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), [9, 10]);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn interleaved_operations_keep_order() {
        let mut q = Queue::new();
        let mut out = Vec::new();
        for i in 0..10 {
            q.enqueue(i);
            if i % 3 == 2 {
                out.extend(q.dequeue());
            }
        }
        while let Some(v) = q.dequeue() {
            out.push(v);
        }
        assert_eq!(out, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn peek_mut_edits_front() {
        let mut q: Queue<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        q.peek_mut().unwrap().push('!');
        assert_eq!(q.dequeue().as_deref(), Some("a!"));
    }
}
