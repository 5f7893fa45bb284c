//! Maximum weight matching on a tree. Unweighted trees give the maximum number
//! of disjoint edges.

use crate::{
    reroot::{aggregate, SubtreeDp},
    rooted::RootedTree,
    tree::{EdgeWeight, Node},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matching {
    /// Best matching of the subtree leaving its root unmatched.
    pub free: i64,
    /// Best change from matching the root to one of its children, None for a
    /// leaf.
    gain: Option<i64>,
}

impl Matching {
    /// Best matching of the subtree with its root matched to a child.
    pub fn matched(&self) -> Option<i64> {
        self.gain.map(|g| self.free + g)
    }

    pub fn best(&self) -> i64 {
        self.matched().map_or(self.free, |m| m.max(self.free))
    }
}

pub struct MaxMatching;

impl<W: EdgeWeight> SubtreeDp<W> for MaxMatching {
    type Agg = Matching;
    fn init(&self, _: Node) -> Matching {
        Matching::default()
    }
    fn pull(&self, parent: &mut Matching, child: &Matching, w: &W) {
        let best = child.best();
        parent.free += best;
        // Matching the edge frees nothing else but forces the child unmatched.
        let gain = child.free + w.weight() - best;
        parent.gain = Some(parent.gain.map_or(gain, |g| g.max(gain)));
    }
}

pub fn max_matching<W: EdgeWeight>(tree: &RootedTree<'_, W>) -> i64 {
    aggregate(tree, &MaxMatching)[tree.root()].best()
}
