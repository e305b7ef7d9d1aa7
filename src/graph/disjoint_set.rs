/// Union-find over the dense vertex ids of a graph.
///
/// `find` uses iterative path-halving, `union` attaches the lower-rank
/// root under the higher-rank one. `union` returning false means both
/// elements were already in the same set, which Kruskal reads as a
/// cycle signal.
#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `element_count` singleton sets.
    pub fn new(element_count: usize) -> Self {
        Self {
            parent: (0..element_count).collect(),
            rank: vec![0; element_count],
        }
    }

    /// Returns the representative of the set containing `element`.
    pub fn find(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            let grandparent = self.parent[self.parent[element]];
            self.parent[element] = grandparent;
            element = grandparent;
        }
        element
    }

    /// Merges the sets containing `first` and `second`. Returns whether
    /// a merge took place.
    pub fn union(&mut self, first: usize, second: usize) -> bool {
        let first_root = self.find(first);
        let second_root = self.find(second);
        if first_root == second_root {
            return false;
        }
        if self.rank[first_root] < self.rank[second_root] {
            self.parent[first_root] = second_root;
        } else if self.rank[first_root] > self.rank[second_root] {
            self.parent[second_root] = first_root;
        } else {
            self.parent[second_root] = first_root;
            self.rank[first_root] += 1;
        }
        true
    }
}
