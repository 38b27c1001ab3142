//! Union-find with path compression and union by rank.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Disjoint-set forest over arbitrary copyable keys.
///
/// Every key must be registered with [`make_set`](Self::make_set) before it
/// is passed to [`find`](Self::find) or [`union`](Self::union); touching an
/// unregistered key is a programming error and panics.
#[derive(Clone, Debug, Default)]
pub struct DisjointSetForest<T> {
    parent: HashMap<T, T>,
    rank:   HashMap<T, u32>,
}

impl<T: Copy + Eq + Hash + Debug> DisjointSetForest<T> {
    pub fn new() -> Self {
        Self { parent: HashMap::new(), rank: HashMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: HashMap::with_capacity(capacity),
            rank:   HashMap::with_capacity(capacity),
        }
    }

    /// Register `x` as a singleton root of rank 0.
    ///
    /// Re-registering a key already in the forest leaves it untouched, so an
    /// existing set is never split.
    pub fn make_set(&mut self, x: T) {
        self.parent.entry(x).or_insert(x);
        self.rank.entry(x).or_insert(0);
    }

    pub fn contains(&self, x: T) -> bool {
        self.parent.contains_key(&x)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current parent pointer of `x`, or `None` if unregistered.
    pub fn parent(&self, x: T) -> Option<T> {
        self.parent.get(&x).copied()
    }

    pub fn rank(&self, x: T) -> Option<u32> {
        self.rank.get(&x).copied()
    }

    /// Representative root of the set containing `x`.
    ///
    /// Iterative two-pass walk: locate the root, then repoint every node on
    /// the path directly at it.
    ///
    /// # Panics
    /// If `x` was never registered.
    pub fn find(&mut self, x: T) -> T {
        let mut root = self.parent_of(x);
        let mut cur = x;
        while root != cur {
            cur = root;
            root = self.parent_of(cur);
        }

        let mut cur = x;
        while cur != root {
            let next = self.parent_of(cur);
            self.parent.insert(cur, root);
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The lower-rank root is attached under the higher-rank one; on equal
    /// ranks `a`'s root survives and its rank grows by one.  Returns `false`
    /// (and changes nothing) if `a` and `b` were already in the same set.
    ///
    /// # Panics
    /// If either key was never registered.
    pub fn union(&mut self, a: T, b: T) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank_of(root_a);
        let rank_b = self.rank_of(root_b);
        if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else {
            self.parent.insert(root_b, root_a);
            self.rank.insert(root_a, rank_a + 1);
        }
        true
    }

    /// `true` if `a` and `b` belong to the same set.
    pub fn same_set(&mut self, a: T, b: T) -> bool {
        self.find(a) == self.find(b)
    }

    fn parent_of(&self, x: T) -> T {
        match self.parent.get(&x) {
            Some(&p) => p,
            None => panic!("disjoint-set key {x:?} used before make_set"),
        }
    }

    fn rank_of(&self, x: T) -> u32 {
        match self.rank.get(&x) {
            Some(&r) => r,
            None => panic!("disjoint-set key {x:?} used before make_set"),
        }
    }
}
