//! Distances from every node: sum to all other nodes, and farthest node.

use crate::{
    reroot::{reroot, reroot_invertible, InvertibleDp, RerootDp, SubtreeDp},
    rooted::RootedTree,
    tree::{EdgeWeight, Node},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distances {
    /// Nodes in the subtree.
    pub size: i64,
    /// Sum of distances from the subtree root to every node in the subtree.
    pub total: i64,
}

pub struct SumOfDistances;

impl<W: EdgeWeight> SubtreeDp<W> for SumOfDistances {
    type Agg = Distances;
    fn init(&self, _: Node) -> Distances {
        Distances { size: 1, total: 0 }
    }
    fn pull(&self, parent: &mut Distances, child: &Distances, w: &W) {
        // Every node of the child's subtree goes through the edge.
        parent.size += child.size;
        parent.total += child.total + child.size * w.weight();
    }
}

impl<W: EdgeWeight> InvertibleDp<W> for SumOfDistances {
    fn unpull(&self, parent: &mut Distances, child: &Distances, w: &W) {
        parent.size -= child.size;
        parent.total -= child.total + child.size * w.weight();
    }

    fn transfer(&self, parent_answer: &Distances, child: &Distances, w: &W) -> Distances {
        // Moving across the edge gets closer to the child's subtree and farther
        // from everything else.
        let n = parent_answer.size;
        Distances {
            size: n,
            total: parent_answer.total + w.weight() * (n - 2 * child.size),
        }
    }
}

/// For each node, the sum of its distances to all other nodes.
pub fn sum_of_distances<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> Vec<i64> {
    reroot_invertible(tree, &SumOfDistances)
        .answer
        .into_iter()
        .map(|d| d.total)
        .collect()
}

/// The two tallest branches hanging from a node, a branch made of the node
/// alone counting as 0. Edge weights are assumed non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heights {
    pub best: i64,
    pub second: i64,
}

impl Heights {
    fn push(self, h: i64) -> Self {
        if h > self.best {
            Self {
                best: h,
                second: self.best,
            }
        } else {
            Self {
                best: self.best,
                second: self.second.max(h),
            }
        }
    }
}

pub struct Farthest;

impl<W: EdgeWeight> RerootDp<W> for Farthest {
    type Value = Heights;
    type Acc = Heights;
    fn identity(&self) -> Heights {
        Heights::default()
    }
    fn merge(&self, a: &Heights, b: &Heights) -> Heights {
        a.push(b.best).push(b.second)
    }
    fn lift(&self, value: &Heights, w: &W) -> Heights {
        Heights {
            best: value.best + w.weight(),
            second: 0,
        }
    }
    fn close(&self, _: Node, branches: &Heights) -> Heights {
        *branches
    }
}

/// Tallest two branches of every node, with every node as the root.
pub fn branch_heights<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> Vec<Heights> {
    reroot(tree, &Farthest).answer
}

/// For each node, the distance to the node farthest from it.
pub fn eccentricities<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> Vec<i64> {
    branch_heights(tree).into_iter().map(|h| h.best).collect()
}
