//! Classic tree statistics built on the [`reroot`](crate::reroot) passes.
//!
//! Functions taking node weights expect one `i64` per node and fail with
//! [`TreeError::WeightCount`] otherwise.

use crate::{
    error::{Result, TreeError},
    reroot::{aggregate, SubtreeDp},
    rooted::RootedTree,
    tree::Node,
};

pub mod cover;
pub mod diameter;
pub mod distance;
pub mod flow;
pub mod knapsack;
pub mod matching;
pub mod paths;

pub use cover::{max_independent_set, min_dominating_set, min_vertex_cover};
pub use diameter::{diameter, on_diameter, vertices_on_diameter, Diameter};
pub use distance::{eccentricities, sum_of_distances};
pub use flow::max_flow_to_leaves;
pub use knapsack::{tree_knapsack, Item};
pub use matching::max_matching;
pub use paths::{and_path_sum, or_path_sum, xor_path_sum, xor_path_xor_sum};

/// Number of nodes in each subtree.
pub struct SubtreeSize;

impl<W> SubtreeDp<W> for SubtreeSize {
    type Agg = usize;
    fn init(&self, _: Node) -> usize {
        1
    }
    fn pull(&self, parent: &mut usize, child: &usize, _: &W) {
        *parent += child;
    }
}

pub fn subtree_sizes<W>(tree: &RootedTree<'_, W>) -> Vec<usize> {
    aggregate(tree, &SubtreeSize)
}

/// Per-node inputs must cover every node exactly once.
fn check_len<W>(tree: &RootedTree<'_, W>, found: usize) -> Result<()> {
    if found != tree.len() {
        return Err(TreeError::WeightCount {
            expected: tree.len(),
            found,
        });
    }
    Ok(())
}
