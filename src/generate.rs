//! Tree generators for tests and benchmarks. Shapes that stress the
//! traversals (long paths, wide stars) come with both plain and shuffled
//! labels.

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::Result,
    tree::{EdgeWeight, Node, Tree},
};

/// Path 0 - 1 - ... - (n - 1).
pub fn path(n: usize) -> Result<Tree> {
    Tree::new(n, (1..n).map(|i| (i - 1, i)))
}

/// Node 0 joined to every other node.
pub fn star(n: usize) -> Result<Tree> {
    Tree::new(n, (1..n).map(|i| (0, i)))
}

/// Parent of each node i > 0 in a uniformly random recursive tree, before
/// relabeling.
fn random_parents(n: usize, rng: &mut impl Rng) -> Vec<(Node, Node)> {
    (1..n).map(|i| (rng.gen_range(0..i), i)).collect()
}

/// Apply a random permutation to the labels of the edges.
fn shuffle_labels(n: usize, edges: &mut [(Node, Node)], rng: &mut impl Rng) {
    let mut label: Vec<Node> = (0..n).collect();
    label.shuffle(rng);
    for (u, v) in edges.iter_mut() {
        (*u, *v) = (label[*u], label[*v]);
    }
    edges.shuffle(rng);
}

pub fn random_tree(n: usize, rng: &mut impl Rng) -> Result<Tree> {
    let mut edges = random_parents(n, rng);
    shuffle_labels(n, &mut edges, rng);
    Tree::new(n, edges)
}

/// Random tree with the edge data drawn by `weight`.
pub fn random_weighted_tree<W: EdgeWeight, R: Rng>(
    n: usize,
    rng: &mut R,
    mut weight: impl FnMut(&mut R) -> W,
) -> Result<Tree<W>> {
    let mut edges = random_parents(n, rng);
    shuffle_labels(n, &mut edges, rng);
    let weighted: Vec<_> = edges
        .into_iter()
        .map(|(u, v)| (u, v, weight(rng)))
        .collect();
    Tree::with_weights(n, weighted)
}

/// Path with randomly shuffled labels.
pub fn shuffled_path(n: usize, rng: &mut impl Rng) -> Result<Tree> {
    let mut edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    shuffle_labels(n, &mut edges, rng);
    Tree::new(n, edges)
}

/// A spine of `spine` nodes, each carrying `legs` leaves.
pub fn caterpillar(spine: usize, legs: usize, rng: &mut impl Rng) -> Result<Tree> {
    let n = spine * (legs + 1);
    let mut edges: Vec<_> = (1..spine).map(|i| (i - 1, i)).collect();
    edges.extend((0..spine * legs).map(|j| (j / legs.max(1), spine + j)));
    shuffle_labels(n, &mut edges, rng);
    Tree::new(n, edges)
}
