//! Knapsack with dependencies: an item can be taken only together with the
//! item of its parent, and the root's item is always taken.

use super::check_len;
use crate::{
    error::Result,
    reroot::{aggregate, SubtreeDp},
    rooted::RootedTree,
    tree::Node,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: i64,
}

#[derive(Debug, Clone)]
pub struct Budget {
    /// Weight of the subtree root's own item.
    own: usize,
    /// `best[c]` is the best value within capacity c with the subtree root
    /// taken, or 0 when the root alone doesn't fit.
    pub best: Vec<i64>,
}

pub struct TreeKnapsack<'i> {
    pub items: &'i [Item],
    pub capacity: usize,
}

impl<W> SubtreeDp<W> for TreeKnapsack<'_> {
    type Agg = Budget;
    fn init(&self, u: Node) -> Budget {
        let Item { weight, value } = self.items[u];
        Budget {
            own: weight,
            best: (0..=self.capacity)
                .map(|c| if c >= weight { value } else { 0 })
                .collect(),
        }
    }
    fn pull(&self, parent: &mut Budget, child: &Budget, _: &W) {
        // Share capacity j between the parent side and the child's subtree,
        // keeping room for the parent's own item. Going down in j reads the
        // values from before this child.
        let best = &mut parent.best;
        for j in (parent.own..=self.capacity).rev() {
            let mut shared = best[j] + child.best[0];
            for given in 1..=j - parent.own {
                shared = shared.max(best[j - given] + child.best[given]);
            }
            best[j] = best[j].max(shared);
        }
    }
}

/// Best total value within `capacity`. Returns 0 when the root's item doesn't
/// fit.
pub fn tree_knapsack<W>(tree: &RootedTree<'_, W>, items: &[Item], capacity: usize) -> Result<i64> {
    check_len(tree, items.len())?;
    let root = &aggregate(tree, &TreeKnapsack { items, capacity })[tree.root()];
    Ok(root.best[capacity])
}
