//! Maximum flow from a source node to all leaves, for every choice of source.
//!
//! Edge data are capacities. The flow leaving a node through an edge is the
//! capacity if the far side is a leaf, and otherwise the smaller of the
//! capacity and what the far side can drain further down.

use crate::{
    reroot::{reroot, RerootDp},
    rooted::RootedTree,
    tree::{EdgeWeight, Node},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drain {
    pub flow: i64,
    /// No branch hangs from the node, in the current orientation.
    pub leaf: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inflow {
    pub flow: i64,
    pub branches: usize,
}

pub struct FlowToLeaves;

impl<W: EdgeWeight> RerootDp<W> for FlowToLeaves {
    type Value = Drain;
    type Acc = Inflow;
    fn identity(&self) -> Inflow {
        Inflow::default()
    }
    fn merge(&self, a: &Inflow, b: &Inflow) -> Inflow {
        Inflow {
            flow: a.flow + b.flow,
            branches: a.branches + b.branches,
        }
    }
    fn lift(&self, value: &Drain, w: &W) -> Inflow {
        let capacity = w.weight();
        Inflow {
            flow: if value.leaf {
                capacity
            } else {
                capacity.min(value.flow)
            },
            branches: 1,
        }
    }
    fn close(&self, _: Node, branches: &Inflow) -> Drain {
        Drain {
            flow: branches.flow,
            leaf: branches.branches == 0,
        }
    }
}

/// For each node as the source, the maximum flow reaching the leaves. The
/// source itself never counts as a leaf.
pub fn max_flow_to_leaves<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> Vec<i64> {
    reroot(tree, &FlowToLeaves)
        .answer
        .into_iter()
        .map(|d| d.flow)
        .collect()
}
