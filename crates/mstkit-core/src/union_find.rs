//! Union-Find (disjoint set) structure backing Kruskal's cycle test.
//!
//! Path compression is full (two-pass): [`UnionFind::find`] first walks to
//! the root, then repoints every node on the walked path directly at it. The
//! loop form gives the same final parent array as the recursive formulation
//! without any recursion depth limit.
//!
//! The structure counts its own work for benchmarking. `finds` grows by one
//! per node visited on a find path (root included), which equals the number
//! of calls the recursive formulation makes, nested calls counted. `unions`
//! grows by one per [`UnionFind::union`] call, including calls that merge
//! nothing.

use crate::edge::VertexId;

/// A union-find structure with full path compression, union-by-rank and
/// operation counters.
///
/// Each element is a `usize` ordinal in `[0, n)` where `n` is the number of
/// elements supplied at construction time.
///
/// # Tie-break
///
/// When two roots of equal rank are merged by `union(a, b)`, `b`'s root is
/// attached under `a`'s root and `a`'s root gains one rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<VertexId>,
    rank: Vec<u32>,
    finds: u64,
    unions: u64,
}

impl UnionFind {
    /// Creates a new `UnionFind` with `n` singleton sets and zeroed counters.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            finds: 0,
            unions: 0,
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is relinked to the root.
    ///
    /// # Panics
    ///
    /// Panics with an index fault if `x >= len()`; this is a logic error in
    /// the caller.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        self.finds += 1;
        while self.parent[root] != root {
            root = self.parent[root];
            self.finds += 1;
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` without changing the partition when both are already
    /// in the same set, `true` when two sets were merged. The lower-rank root
    /// goes under the higher-rank root; see the type docs for ties.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        self.unions += 1;
        let ra = self.find(a);
        let rb = self.find(b);

        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => {
                self.parent[ra] = rb;
            }
            std::cmp::Ordering::Greater => {
                self.parent[rb] = ra;
            }
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    /// Returns `true` if `a` and `b` share a representative.
    ///
    /// Counted as two finds.
    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Total number of find steps performed so far.
    pub fn finds(&self) -> u64 {
        self.finds
    }

    /// Total number of `union` calls so far, no-ops included.
    pub fn unions(&self) -> u64 {
        self.unions
    }

    /// Returns the number of elements in this `UnionFind`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if this `UnionFind` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    ///
    /// Reads the parent array directly and does not touch the counters.
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(i, p)| *i == **p)
            .count()
    }
}
