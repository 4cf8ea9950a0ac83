//! Queue that removes items in uniformly random order.

use derivative::Derivative;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::EmptyStructure;

/// Items live in a resizable array. Random removal swaps the chosen item with the last one,
/// so `enqueue`, `dequeue` and `sample` are all amortized O(1).
#[derive(Derivative)]
#[derivative(Debug)]
pub struct RandomizedQueue<T> {
    items: Vec<T>,
    #[derivative(Debug = "ignore")]
    rng: StdRng,
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RandomizedQueue<T> {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic queue, mostly useful for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { items: vec![], rng }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns a uniformly random item.
    pub fn dequeue(&mut self) -> Result<T, EmptyStructure> {
        if self.items.is_empty() {
            return Err(EmptyStructure);
        }
        let i = self.rng.gen_range(0..self.items.len());
        let item = self.items.swap_remove(i);
        let capacity = self.items.capacity();
        if !self.items.is_empty() && self.items.len() <= capacity / 4 {
            self.items.shrink_to(capacity / 2);
        }
        Ok(item)
    }

    /// Returns, without removing, a uniformly random item.
    pub fn sample(&mut self) -> Result<&T, EmptyStructure> {
        self.items.choose(&mut self.rng).ok_or(EmptyStructure)
    }

    /// Iterates over all items in a fresh uniformly random order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_with(&mut rand::thread_rng())
    }

    /// Same as `iter`, shuffling with the given generator.
    pub fn iter_with(&self, rng: &mut impl Rng) -> Iter<'_, T> {
        let mut order: Vec<&T> = self.items.iter().collect();
        order.shuffle(rng);
        Iter(order.into_iter())
    }
}

/// Independent of other iterators over the same queue.
pub struct Iter<'a, T>(std::vec::IntoIter<&'a T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RandomizedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
