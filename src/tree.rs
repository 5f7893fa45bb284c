//! Validated undirected trees stored as compressed adjacency lists.

use std::fmt::Debug;

use derivative::Derivative;

use crate::{
    error::{Result, TreeError},
    rooted::RootedTree,
};

pub type Node = usize;

/// Stands for "no node", e.g. the parent of the root.
pub const NONE: Node = usize::MAX;

/// Edge data that can be read as a length or a capacity.
pub trait EdgeWeight: Debug + Clone {
    /// The value as an `i64`, or None when it doesn't fit.
    fn try_weight(&self) -> Option<i64>;

    /// Only read from built trees, whose weights were all checked to fit.
    fn weight(&self) -> i64 {
        self.try_weight().unwrap_or(i64::MAX)
    }
}

impl EdgeWeight for () {
    fn try_weight(&self) -> Option<i64> {
        Some(1)
    }
}

macro_rules! impl_edge_weight {
    ($($t:ty),*) => {
        $(impl EdgeWeight for $t {
            fn try_weight(&self) -> Option<i64> {
                i64::try_from(*self).ok()
            }
        })*
    };
}

impl_edge_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// An undirected tree on nodes `0..n`. Construction checks that the edges
/// really form a tree, so everything built on top can assume it.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct Tree<W = ()> {
    /// Neighbors of u are `adj[start[u]..start[u + 1]]`.
    #[derivative(Debug = "ignore")]
    start: Vec<usize>,
    adj: Vec<(Node, W)>,
}

impl Tree<()> {
    /// Unweighted tree on `n` nodes.
    pub fn new(n: usize, edges: impl IntoIterator<Item = (Node, Node)>) -> Result<Self> {
        Self::with_weights(n, edges.into_iter().map(|(u, v)| (u, v, ())))
    }
}

impl<W: EdgeWeight> Tree<W> {
    /// Tree on `n` nodes with data on every edge. Every weight must fit in an
    /// `i64`.
    pub fn with_weights(
        n: usize,
        edges: impl IntoIterator<Item = (Node, Node, W)>,
    ) -> Result<Self> {
        if n == 0 {
            return Err(TreeError::Empty);
        }
        let edges: Vec<_> = edges.into_iter().collect();
        if edges.len() != n - 1 {
            return Err(TreeError::EdgeCount {
                nodes: n,
                edges: edges.len(),
            });
        }
        let mut degree = vec![0usize; n];
        for (u, v, w) in &edges {
            let (u, v) = (*u, *v);
            if let Some(node) = [u, v].into_iter().find(|&x| x >= n) {
                return Err(TreeError::NodeOutOfRange { node, nodes: n });
            }
            if u == v {
                return Err(TreeError::SelfLoop { node: u });
            }
            if w.try_weight().is_none() {
                return Err(TreeError::WeightOutOfRange { u, v });
            }
            degree[u] += 1;
            degree[v] += 1;
        }
        let mut start = Vec::with_capacity(n + 1);
        start.push(0);
        for d in degree {
            start.push(start[start.len() - 1] + d);
        }
        let mut next = start[..n].to_vec();
        let mut slots: Vec<Option<(Node, W)>> = (0..2 * (n - 1)).map(|_| None).collect();
        for (u, v, w) in edges {
            slots[next[u]] = Some((v, w.clone()));
            next[u] += 1;
            slots[next[v]] = Some((u, w));
            next[v] += 1;
        }
        let tree = Self {
            start,
            adj: slots.into_iter().flatten().collect(),
        };
        // Walking from any node finds cycles, repeated edges and missing nodes.
        tree.rooted_at(0)?;
        log::debug!("built tree on {n} nodes");
        Ok(tree)
    }
}

impl<W> Tree<W> {
    /// Number of nodes, always at least 1.
    pub fn node_count(&self) -> usize {
        self.start.len() - 1
    }

    pub fn degree(&self, u: Node) -> usize {
        self.start[u + 1] - self.start[u]
    }

    /// Neighbors of u together with the edge data.
    pub fn neighbors(&self, u: Node) -> impl Iterator<Item = (Node, &W)> + '_ {
        self.adj[self.start[u]..self.start[u + 1]]
            .iter()
            .map(|(v, w)| (*v, w))
    }

    /// Same as `neighbors`, also yielding the position of each entry in the
    /// adjacency storage.
    pub(crate) fn neighbor_slots(&self, u: Node) -> impl Iterator<Item = (usize, Node)> + '_ {
        (self.start[u]..self.start[u + 1]).map(|i| (i, self.adj[i].0))
    }

    /// Edge data stored at an adjacency slot returned by `neighbor_slots`.
    pub(crate) fn slot_weight(&self, slot: usize) -> &W {
        &self.adj[slot].1
    }

    /// All edges, each reported once as (u, v, data) with u < v.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node, &W)> + '_ {
        (0..self.node_count()).flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| (u, v, w))
        })
    }

    /// The tree rooted at `root`.
    pub fn rooted_at(&self, root: Node) -> Result<RootedTree<'_, W>> {
        RootedTree::new(self, root)
    }

    /// The tree rooted at node 0.
    pub fn rooted(&self) -> RootedTree<'_, W> {
        self.rooted_at(0).unwrap_or_else(|e| validated_panic(e))
    }
}

fn validated_panic(e: TreeError) -> ! {
    panic!("validated tree failed to root: {e}")
}
