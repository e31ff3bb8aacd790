/// Disjoint-set over room indices, used only while the spanning tree is under
/// construction. Room 0 is the distinguished root every cluster eventually
/// merges into.
///
/// Indices are trusted; grids are assumed to fit in `u32`.
pub(crate) struct Clusters {
    parents: Vec<u32>,
    /// Scratch buffer reused across `find` calls for path compression.
    path: Vec<u32>,
    /// Rooms in `[0, merged_prefix)` are confirmed to resolve to root 0, so
    /// repeated `all_merged` polls only rescan the unconfirmed suffix.
    merged_prefix: usize,
}

impl Clusters {
    pub(crate) fn new(rooms: usize) -> Self {
        Clusters {
            parents: (0..rooms as u32).collect(),
            path: Vec::with_capacity(8),
            merged_prefix: 0,
        }
    }

    /// Resolves a room to its cluster root, compressing every visited room
    /// directly to the root on the way.
    pub(crate) fn find(&mut self, room: u32) -> u32 {
        if self.parents[room as usize] == 0 {
            return 0;
        }
        self.path.clear();
        let mut current = room;
        loop {
            let parent = self.parents[current as usize];
            if parent == current {
                break;
            }
            self.path.push(current);
            current = parent;
        }
        for &visited in &self.path {
            self.parents[visited as usize] = current;
        }
        current
    }

    /// Merges two clusters, given their roots: the numerically larger root is
    /// attached under the smaller one.
    pub(crate) fn union(&mut self, a: u32, b: u32) {
        if a < b {
            self.parents[b as usize] = a;
        } else {
            self.parents[a as usize] = b;
        }
    }

    /// True once every room resolves to root 0. The confirmed prefix is
    /// remembered, so polling once per construction step stays amortized
    /// linear over the whole build.
    pub(crate) fn all_merged(&mut self) -> bool {
        while self.merged_prefix < self.parents.len() {
            if self.find(self.merged_prefix as u32) != 0 {
                return false;
            }
            self.merged_prefix += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_is_merged() {
        let mut clusters = Clusters::new(1);
        assert!(clusters.all_merged());
    }

    #[test]
    fn test_find_initially_distinct() {
        let mut clusters = Clusters::new(4);
        let roots: Vec<u32> = (0..4).map(|i| clusters.find(i)).collect();
        assert_eq!(roots, vec![0, 1, 2, 3]);
        assert!(!clusters.all_merged());
    }

    #[test]
    fn test_union_attaches_larger_under_smaller() {
        let mut clusters = Clusters::new(3);
        clusters.union(1, 2);
        assert_eq!(clusters.find(2), 1);
        clusters.union(0, 1);
        assert_eq!(clusters.find(2), 0);
        assert_eq!(clusters.find(1), 0);
        assert!(clusters.all_merged());
    }

    #[test]
    fn test_path_compression() {
        let mut clusters = Clusters::new(5);
        // Build the chain 4 -> 3 -> 2 -> 1 by pairwise unions.
        clusters.union(3, 4);
        clusters.union(2, 3);
        clusters.union(1, 2);
        assert_eq!(clusters.find(4), 1);
        // The chain is now flattened: 4 points straight at the root.
        assert_eq!(clusters.parents[4], 1);
    }

    #[test]
    fn test_all_merged_cursor_advances() {
        let mut clusters = Clusters::new(4);
        clusters.union(0, 1);
        assert!(!clusters.all_merged());
        assert_eq!(clusters.merged_prefix, 2);
        clusters.union(0, 2);
        clusters.union(0, 3);
        assert!(clusters.all_merged());
        assert_eq!(clusters.merged_prefix, 4);
    }
}
