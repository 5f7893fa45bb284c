//! Tree diameter, how many node pairs realize it, and which nodes lie on one.

use super::distance::branch_heights;
use crate::{
    reroot::{aggregate, SubtreeDp},
    rooted::RootedTree,
    tree::{EdgeWeight, Node},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diameter {
    /// Largest distance between two nodes.
    pub length: i64,
    /// Unordered pairs of nodes at that distance. A single node counts as one
    /// path of length 0.
    pub count: u64,
}

/// Deepest nodes and longest paths of a subtree. A path is counted at its
/// topmost node, so each pair is counted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    pub depth: i64,
    /// Nodes at distance `depth` below the subtree root.
    pub deepest: u64,
    pub longest: i64,
    /// Pairs at distance `longest` inside the subtree.
    pub count: u64,
}

impl Reach {
    fn offer(&mut self, length: i64, count: u64) {
        if length > self.longest {
            self.longest = length;
            self.count = count;
        } else if length == self.longest {
            self.count += count;
        }
    }
}

pub struct LongestPaths;

impl<W: EdgeWeight> SubtreeDp<W> for LongestPaths {
    type Agg = Reach;
    fn init(&self, _: Node) -> Reach {
        Reach {
            depth: 0,
            deepest: 1,
            longest: 0,
            count: 0,
        }
    }
    fn pull(&self, parent: &mut Reach, child: &Reach, w: &W) {
        let depth = child.depth + w.weight();
        // Join the child's deepest nodes with the ones attached so far,
        // including the parent itself.
        parent.offer(parent.depth + depth, parent.deepest * child.deepest);
        parent.offer(child.longest, child.count);
        if depth > parent.depth {
            parent.depth = depth;
            parent.deepest = child.deepest;
        } else if depth == parent.depth {
            parent.deepest += child.deepest;
        }
    }
}

/// Length of the diameter and the number of node pairs realizing it. A node
/// is at distance 0 from itself, so the length is never negative.
pub fn diameter<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> Diameter {
    let root = aggregate(tree, &LongestPaths)[tree.root()];
    Diameter {
        length: root.longest,
        count: if tree.len() == 1 { 1 } else { root.count },
    }
}

/// Whether each node lies on at least one longest path. Edge weights are
/// assumed non-negative.
pub fn on_diameter<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> Vec<bool> {
    let heights = branch_heights(tree);
    let length = heights.iter().map(|h| h.best).max().unwrap_or(0);
    heights
        .into_iter()
        .map(|h| h.best + h.second == length)
        .collect()
}

/// Number of nodes lying on at least one longest path.
pub fn vertices_on_diameter<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> usize {
    on_diameter(tree).into_iter().filter(|&on| on).count()
}
