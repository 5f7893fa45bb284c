//! Tree DP in two passes.
//!
//! The first pass computes an aggregate for every subtree of the rooted tree,
//! children before parents. The second pass walks parents before children and
//! moves the root across each edge, so every node gets the answer it would
//! have as the root of the whole tree. Both passes are loops over the stored
//! pre-order of [`RootedTree`], never recursion.
//!
//! Statistics whose child merge can be undone implement [`InvertibleDp`] and
//! move the root in O(1). The rest implement [`RerootDp`], where the answer for
//! a child is rebuilt from prefix and suffix merges of its siblings.

use std::fmt::Debug;

use crate::{rooted::RootedTree, tree::Node};

/// A statistic over subtrees.
pub trait SubtreeDp<W> {
    type Agg: Clone + Debug;
    /// Aggregate of u with no children attached.
    fn init(&self, u: Node) -> Self::Agg;
    /// Attach the subtree of a child, hanging from an edge with data `w`.
    fn pull(&self, parent: &mut Self::Agg, child: &Self::Agg, w: &W);
}

/// A [`SubtreeDp`] whose `pull` can be undone.
pub trait InvertibleDp<W>: SubtreeDp<W> {
    /// Undo `pull(parent, child, w)`.
    fn unpull(&self, parent: &mut Self::Agg, child: &Self::Agg, w: &W);

    /// Answer at a child from the answer at its parent and the child's own
    /// subtree aggregate. Override this when there is a closed form.
    fn transfer(&self, parent_answer: &Self::Agg, child: &Self::Agg, w: &W) -> Self::Agg {
        let mut rest = parent_answer.clone();
        self.unpull(&mut rest, child, w);
        let mut answer = child.clone();
        self.pull(&mut answer, &rest, w);
        answer
    }
}

/// A statistic for all roots that can't be undone, e.g. maxima.
///
/// Branches of a node are lifted into `Acc`, merged in any order, and closed
/// at the node into a `Value`.
pub trait RerootDp<W> {
    type Value: Clone + Debug;
    type Acc: Clone;
    /// Merge of no branches.
    fn identity(&self) -> Self::Acc;
    /// Must be associative and commutative.
    fn merge(&self, a: &Self::Acc, b: &Self::Acc) -> Self::Acc;
    /// A branch whose top node has `value`, seen through an edge with data `w`.
    fn lift(&self, value: &Self::Value, w: &W) -> Self::Acc;
    /// Value at u once all of `branches` hang from it.
    fn close(&self, u: Node, branches: &Self::Acc) -> Self::Value;
}

/// Output of a rerooting run.
#[derive(Debug, Clone)]
pub struct Rerooted<T> {
    /// Root used for the subtree pass.
    pub root: Node,
    /// Value of each subtree, with the tree rooted at `root`.
    pub subtree: Vec<T>,
    /// Value of each node as the root of the whole tree.
    pub answer: Vec<T>,
}

/// Mutable references to two different elements.
fn get_two<T>(xs: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (a, b) = xs.split_at_mut(j);
        (&mut a[i], &mut b[0])
    } else {
        let (a, b) = xs.split_at_mut(i);
        (&mut b[0], &mut a[j])
    }
}

/// Subtree aggregates of every node. This is the only pass needed when the
/// statistic is queried at the root alone.
pub fn aggregate<W, D>(tree: &RootedTree<'_, W>, dp: &D) -> Vec<D::Agg>
where
    D: SubtreeDp<W> + ?Sized,
{
    log::debug!(
        "aggregating {} nodes rooted at {}",
        tree.len(),
        tree.root()
    );
    let mut agg: Vec<D::Agg> = (0..tree.len()).map(|u| dp.init(u)).collect();
    for u in tree.post_order() {
        if let Some((p, w)) = tree.parent_edge(u) {
            let (child, parent) = get_two(&mut agg, u, p);
            dp.pull(parent, child, w);
        }
    }
    agg
}

/// Answers for every root of an invertible statistic, O(1) per edge.
pub fn reroot_invertible<W, D>(tree: &RootedTree<'_, W>, dp: &D) -> Rerooted<D::Agg>
where
    D: InvertibleDp<W> + ?Sized,
{
    let subtree = aggregate(tree, dp);
    let mut answer = subtree.clone();
    for &u in &tree.order()[1..] {
        if let Some((p, w)) = tree.parent_edge(u) {
            let moved = dp.transfer(&answer[p], &subtree[u], w);
            log::trace!("root {p} -> {u}: {moved:?}");
            answer[u] = moved;
        }
    }
    Rerooted {
        root: tree.root(),
        subtree,
        answer,
    }
}

/// Answers for every root of any statistic, O(degree) per node.
pub fn reroot<W, D>(tree: &RootedTree<'_, W>, dp: &D) -> Rerooted<D::Value>
where
    D: RerootDp<W> + ?Sized,
{
    let n = tree.len();
    log::debug!("rerooting {n} nodes from {}", tree.root());

    // Children before parents. `lifted[u]` is the subtree of u as seen from
    // its parent.
    let mut branches = vec![dp.identity(); n];
    let mut lifted = vec![dp.identity(); n];
    let mut subtree: Vec<Option<D::Value>> = vec![None; n];
    for u in tree.post_order() {
        let value = dp.close(u, &branches[u]);
        if let Some((p, w)) = tree.parent_edge(u) {
            lifted[u] = dp.lift(&value, w);
            branches[p] = dp.merge(&branches[p], &lifted[u]);
        }
        subtree[u] = Some(value);
    }

    // Parents before children. `from_parent[u]` is everything outside the
    // subtree of u, as seen from u.
    let mut from_parent = vec![dp.identity(); n];
    let mut answer: Vec<Option<D::Value>> = vec![None; n];
    let mut kids = Vec::new();
    let mut suffix = Vec::new();
    for &u in tree.order() {
        kids.clear();
        kids.extend(tree.children(u));
        suffix.clear();
        suffix.resize(kids.len() + 1, dp.identity());
        for i in (0..kids.len()).rev() {
            suffix[i] = dp.merge(&lifted[kids[i].0], &suffix[i + 1]);
        }
        answer[u] = Some(dp.close(u, &dp.merge(&from_parent[u], &suffix[0])));
        let mut prefix = from_parent[u].clone();
        for (i, &(v, w)) in kids.iter().enumerate() {
            let rest = dp.close(u, &dp.merge(&prefix, &suffix[i + 1]));
            log::trace!("root {u} -> {v}: rest of the tree {rest:?}");
            from_parent[v] = dp.lift(&rest, w);
            prefix = dp.merge(&prefix, &lifted[v]);
        }
    }

    Rerooted {
        root: tree.root(),
        subtree: subtree.into_iter().flatten().collect(),
        answer: answer.into_iter().flatten().collect(),
    }
}
