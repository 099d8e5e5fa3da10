//! Disjoint-set forest with path compression and union by rank

use super::types::NodeId;

/// Partition of `[0, n)` into disjoint sets
///
/// Ids passed to [`find`](UnionFind::find) and [`union`](UnionFind::union)
/// must be in range; an out-of-range id is a caller bug and panics.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<NodeId>,
    rank: Vec<u32>,
    sets: usize,
}

impl UnionFind {
    /// `n` singleton sets, each node its own representative
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`
    ///
    /// Every node on the walk is rewired directly to the root.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`
    ///
    /// Returns `false` when both were already in the same set. On equal
    /// rank the root of `x` becomes the parent.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        assert_eq!(uf.set_count(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
        assert!(UnionFind::new(0).is_empty());
    }

    #[test]
    fn test_union_reports_merge() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));
        assert!(uf.connected(0, 3));
        assert!(!uf.connected(0, 4));
        assert_eq!(uf.set_count(), 2);
    }

    #[test]
    fn test_self_union_is_rejected() {
        let mut uf = UnionFind::new(3);
        assert!(!uf.union(2, 2));
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn test_equal_rank_prefers_first_root() {
        let mut uf = UnionFind::new(2);
        uf.union(0, 1);
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.rank[0], 1);
    }

    #[test]
    fn test_lower_rank_attaches_under_higher() {
        let mut uf = UnionFind::new(3);
        uf.union(1, 2); // root 1, rank 1
        uf.union(0, 1); // rank 0 < rank 1, so 0 goes under 1
        assert_eq!(uf.find(0), 1);
        assert_eq!(uf.rank[1], 1);
    }

    #[test]
    fn test_path_compression_flattens_chain() {
        let n = 1_000;
        let mut uf = UnionFind::new(n);
        // Hand-build a chain 0 <- 1 <- 2 <- ... to exercise the iterative walk
        for i in 1..n {
            uf.parent[i] = i - 1;
        }
        assert_eq!(uf.find(n - 1), 0);
        for i in 0..n {
            assert_eq!(uf.parent[i], 0);
        }
    }
}
