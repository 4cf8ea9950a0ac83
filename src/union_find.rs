//! Disjoint-set forests over a fixed universe of elements.

use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, add_leaf_to, AsTree, TreeBuilder};

use crate::error::{InvalidArgument, Result};

pub type Element = usize;

/// Interface of a disjoint-set forest (union-find).
/// It partitions the elements 0..len into groups which can only be merged, never split.
pub trait UnionFind: Debug {
    /// Create a forest where each of the `len` elements is its own group.
    fn new(len: usize) -> Self
    where
        Self: Sized;
    /// Size of the universe.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Current number of groups.
    fn count(&self) -> usize;
    /// Representative of the group containing x.
    fn find(&mut self, x: Element) -> Result<Element>;
    /// Merges the groups containing x and y. Returns false if they were already the same group.
    fn union(&mut self, x: Element, y: Element) -> Result<bool>;
    /// Are x and y in the same group?
    fn connected(&mut self, x: Element, y: Element) -> Result<bool> {
        self.validate(y)?;
        Ok(self.find(x)? == self.find(y)?)
    }
    fn validate(&self, x: Element) -> Result<Element> {
        if x < self.len() {
            Ok(x)
        } else {
            Err(InvalidArgument::ElementOutOfRange {
                index: x,
                len: self.len(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    parent: Element,
    /// Number of elements below this one, only kept up to date on roots.
    size: usize,
}

/// Union by size with full path compression. Amortized cost per operation is effectively constant.
#[derive(Clone)]
pub struct WeightedQuickUnion {
    entries: Vec<Entry>,
    count: usize,
}

impl Debug for WeightedQuickUnion {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!("WeightedQuickUnion ({} groups)", self.count));
        let mut children = vec![vec![]; self.entries.len()];
        for (x, e) in self.entries.iter().enumerate() {
            if e.parent != x {
                children[e.parent].push(x);
            }
        }
        for (x, e) in self.entries.iter().enumerate() {
            if e.parent == x {
                self.tree_dbg(x, &children, &builder);
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl WeightedQuickUnion {
    fn tree_dbg<T: AsTree>(&self, x: Element, children: &[Vec<Element>], tree: &T) {
        let e = &self.entries[x];
        if children[x].is_empty() {
            add_leaf_to!(*tree, "{x}");
            return;
        }
        if e.parent == x {
            add_branch_to!(*tree, "{x} (size {})", e.size);
        } else {
            add_branch_to!(*tree, "{x}");
        }
        for &c in &children[x] {
            self.tree_dbg(c, children, tree);
        }
    }

    /// Element x currently points at, x itself for roots. Does not compress anything.
    pub fn parent(&self, x: Element) -> Result<Element> {
        Ok(self.entries[self.validate(x)?].parent)
    }

    /// Assumes x is valid. Points every element on the path directly at the root.
    fn root(&mut self, x: Element) -> Element {
        let mut root = x;
        while self.entries[root].parent != root {
            root = self.entries[root].parent;
        }
        let mut u = x;
        while u != root {
            u = std::mem::replace(&mut self.entries[u].parent, root);
        }
        root
    }
}

impl UnionFind for WeightedQuickUnion {
    fn new(len: usize) -> Self {
        Self {
            entries: (0..len).map(|parent| Entry { parent, size: 1 }).collect(),
            count: len,
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, x: Element) -> Result<Element> {
        self.validate(x)?;
        Ok(self.root(x))
    }

    fn union(&mut self, x: Element, y: Element) -> Result<bool> {
        self.validate(x)?;
        self.validate(y)?;
        let (rx, ry) = (self.root(x), self.root(y));
        if rx == ry {
            return Ok(false);
        }
        // Smaller tree goes under the larger one, ties go under rx.
        let (big, small) = if self.entries[rx].size < self.entries[ry].size {
            (ry, rx)
        } else {
            (rx, ry)
        };
        self.entries[small].parent = big;
        self.entries[big].size += self.entries[small].size;
        self.count -= 1;
        log::trace!("union({x}, {y}): root {small} now under {big}");
        Ok(true)
    }
}
