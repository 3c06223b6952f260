//! LinkedList: singly linked sequence with 0-based positional access.
//!
//! No tail pointer is kept: `append` walks the whole chain, `prepend` is
//! O(1), and every positional operation walks from the head.

use core::fmt;

/// Positional operation outside the valid range. The list is unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for list of length {}", self.index, self.len)
    }
}

impl std::error::Error for IndexError {}

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // Link slot at position `index` (`index <= len`): the head slot or the
    // `next` of node `index - 1`.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur?.next.as_deref();
        }
        cur
    }

    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// O(n): walks to the last node.
    pub fn append(&mut self, value: T) {
        let len = self.len;
        let slot = self.link_at(len);
        *slot = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Insert so that `value` ends up at `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        if index > self.len {
            return Err(IndexError {
                index,
                len: self.len,
            });
        }
        let slot = self.link_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T, IndexError> {
        let err = IndexError {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(err);
        }
        let slot = self.link_at(index);
        let node = slot.take().ok_or(err)?;
        *slot = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.link_at(index).as_mut().map(|n| &mut n.value)
    }

    /// Overwrite the value at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexError> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(IndexError { index, len }),
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cur: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Build back to front so each push is O(1).
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = LinkedList::new();
        for v in items.into_iter().rev() {
            list.prepend(v);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    cur: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        self.cur = node.next.as_deref();
        Some(&node.value)
    }
}
