//! Independent set, vertex cover and dominating set of minimum/maximum weight.
//!
//! Each node keeps one best value per state of the node itself, and a parent
//! combines the states of its children. Only the root's aggregate is read.

use std::fmt::Formatter;

use derivative::Derivative;

use super::check_len;
use crate::{
    error::Result,
    reroot::{aggregate, SubtreeDp},
    rooted::RootedTree,
    tree::Node,
};

/// Best weights with the subtree root taken or skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TakeOrSkip {
    pub take: i64,
    pub skip: i64,
}

pub struct IndependentSet<'w> {
    pub weights: &'w [i64],
}

impl<W> SubtreeDp<W> for IndependentSet<'_> {
    type Agg = TakeOrSkip;
    fn init(&self, u: Node) -> TakeOrSkip {
        TakeOrSkip {
            take: self.weights[u],
            skip: 0,
        }
    }
    fn pull(&self, parent: &mut TakeOrSkip, child: &TakeOrSkip, _: &W) {
        parent.take += child.skip;
        parent.skip += child.take.max(child.skip);
    }
}

/// Maximum total weight of a set of pairwise non-adjacent nodes.
pub fn max_independent_set<W>(tree: &RootedTree<'_, W>, weights: &[i64]) -> Result<i64> {
    check_len(tree, weights.len())?;
    let root = aggregate(tree, &IndependentSet { weights })[tree.root()];
    Ok(root.take.max(root.skip))
}

pub struct VertexCover<'w> {
    pub weights: &'w [i64],
}

impl<W> SubtreeDp<W> for VertexCover<'_> {
    type Agg = TakeOrSkip;
    fn init(&self, u: Node) -> TakeOrSkip {
        TakeOrSkip {
            take: self.weights[u],
            skip: 0,
        }
    }
    fn pull(&self, parent: &mut TakeOrSkip, child: &TakeOrSkip, _: &W) {
        parent.take += child.take.min(child.skip);
        // The edge to the child must be covered from below.
        parent.skip += child.take;
    }
}

/// Minimum total weight of a set of nodes touching every edge.
pub fn min_vertex_cover<W>(tree: &RootedTree<'_, W>, weights: &[i64]) -> Result<i64> {
    check_len(tree, weights.len())?;
    let root = aggregate(tree, &VertexCover { weights })[tree.root()];
    Ok(root.take.min(root.skip))
}

/// Large enough to never be chosen, small enough to never overflow when a few
/// are added together.
const INF: i64 = i64::MAX / 4;

fn inf_fmt(x: &i64, f: &mut Formatter) -> std::fmt::Result {
    if *x >= INF {
        write!(f, "∞")
    } else {
        write!(f, "{x}")
    }
}

#[derive(Derivative, Clone, Copy, PartialEq, Eq)]
#[derivative(Debug)]
pub struct Domination {
    /// The node is in the set.
    pub take: i64,
    /// The node is not in the set, children are dominated. The node itself is
    /// left for its parent or one of its children to dominate.
    pub free: i64,
    /// Cheapest way to turn one child that is dominated from below into a
    /// chosen child. Non-positive once some child is already chosen.
    #[derivative(Debug(format_with = "inf_fmt"))]
    upgrade: i64,
}

impl Domination {
    /// The node is not in the set, and some child is.
    pub fn by_child(&self) -> i64 {
        if self.upgrade >= INF {
            INF
        } else {
            self.free + self.upgrade.max(0)
        }
    }
    /// The node is not in the set, and relies on its parent.
    pub fn by_parent(&self) -> i64 {
        self.free
    }
}

pub struct DominatingSet<'w> {
    pub weights: &'w [i64],
}

impl<W> SubtreeDp<W> for DominatingSet<'_> {
    type Agg = Domination;
    fn init(&self, u: Node) -> Domination {
        Domination {
            take: self.weights[u],
            free: 0,
            upgrade: INF,
        }
    }
    fn pull(&self, parent: &mut Domination, child: &Domination, _: &W) {
        let (take, by_child) = (child.take, child.by_child());
        let dominated = take.min(by_child);
        parent.take += dominated.min(child.by_parent());
        parent.free += dominated;
        parent.upgrade = parent.upgrade.min(take - by_child);
    }
}

/// Minimum total weight of a set of nodes such that every node is in it or
/// next to a node in it. The root has no parent to rely on.
pub fn min_dominating_set<W>(tree: &RootedTree<'_, W>, weights: &[i64]) -> Result<i64> {
    check_len(tree, weights.len())?;
    let root = aggregate(tree, &DominatingSet { weights })[tree.root()];
    Ok(root.take.min(root.by_child()))
}
