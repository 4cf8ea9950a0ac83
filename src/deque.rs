//! Doubly linked double-ended queue, with nodes stored in an index arena.

use std::fmt::Formatter;

use derivative::Derivative;

use crate::error::EmptyStructure;

pub type Idx = usize;

/// Link to no node.
const EMPTY: Idx = usize::MAX;

fn link_fmt(u: &Idx, f: &mut Formatter) -> std::fmt::Result {
    if *u == EMPTY {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
struct Node<T> {
    /// None if the slot is in the free list.
    item: Option<T>,
    #[derivative(Debug(format_with = "link_fmt"))]
    prev: Idx,
    #[derivative(Debug(format_with = "link_fmt"))]
    next: Idx,
}

#[derive(Derivative)]
#[derivative(Debug, Default(bound = ""))]
pub struct Deque<T> {
    nodes: Vec<Node<T>>,
    #[derivative(Debug(format_with = "link_fmt"), Default(value = "EMPTY"))]
    head: Idx,
    #[derivative(Debug(format_with = "link_fmt"), Default(value = "EMPTY"))]
    tail: Idx,
    #[derivative(Debug = "ignore")]
    free: Vec<Idx>,
    len: usize,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts between prev and next, which must be adjacent (or EMPTY at the ends).
    fn link(&mut self, item: T, prev: Idx, next: Idx) {
        let node = Node {
            item: Some(item),
            prev,
            next,
        };
        let u = match self.free.pop() {
            Some(u) => {
                self.nodes[u] = node;
                u
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        if prev == EMPTY {
            self.head = u;
        } else {
            self.nodes[prev].next = u;
        }
        if next == EMPTY {
            self.tail = u;
        } else {
            self.nodes[next].prev = u;
        }
        self.len += 1;
    }

    fn unlink(&mut self, u: Idx) -> Option<T> {
        let node = self.nodes.get_mut(u)?;
        let item = node.item.take()?;
        let (prev, next) = (node.prev, node.next);
        if prev == EMPTY {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == EMPTY {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.len -= 1;
        if self.len == 0 {
            // Nothing is linked anymore, drop the whole arena.
            self.nodes.clear();
            self.free.clear();
        } else {
            self.free.push(u);
        }
        Some(item)
    }

    pub fn push_front(&mut self, item: T) {
        let head = self.head;
        self.link(item, EMPTY, head);
    }

    pub fn push_back(&mut self, item: T) {
        let tail = self.tail;
        self.link(item, tail, EMPTY);
    }

    pub fn pop_front(&mut self) -> Result<T, EmptyStructure> {
        let head = self.head;
        self.unlink(head).ok_or(EmptyStructure)
    }

    pub fn pop_back(&mut self) -> Result<T, EmptyStructure> {
        let tail = self.tail;
        self.unlink(tail).ok_or(EmptyStructure)
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            next: self.head,
            remaining: self.len,
        }
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    next: Idx,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.deque.nodes.get(self.next)?;
        self.next = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, front to back.
pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
