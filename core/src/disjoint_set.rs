//! Union-find over `0..n` with path compression and union by rank.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    set_count: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    /// Canonical representative of `x`'s set.
    ///
    /// Every node on the path from `x` to the root is re-pointed directly at
    /// the root. Two passes instead of recursion so long chains cannot
    /// overflow the stack.
    ///
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`. Returns `false` if they were
    /// already the same set.
    ///
    /// The lower-rank root goes under the higher-rank one. On equal ranks
    /// `y`'s root is attached under `x`'s root, whose rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);

        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            Ordering::Less => self.parent[rx] = ry,
            Ordering::Greater => self.parent[ry] = rx,
            Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }

        self.set_count -= 1;
        true
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.set_count
    }
}
