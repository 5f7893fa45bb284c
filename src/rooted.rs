//! A tree seen from a designated root.
//!
//! Rooting stores a pre-order of the nodes, so passes that need children
//! before parents iterate it backwards instead of recursing. Path-shaped trees
//! with millions of nodes are fine.

use std::fmt::{Debug, Formatter};

use debug_tree::TreeBuilder;

use crate::{
    error::{Result, TreeError},
    tree::{Node, Tree, NONE},
};

pub struct RootedTree<'a, W = ()> {
    tree: &'a Tree<W>,
    root: Node,
    /// Every node appears after its parent.
    order: Vec<Node>,
    parent: Vec<Node>,
    /// Adjacency slot, inside the parent's list, of the edge to the parent.
    parent_slot: Vec<usize>,
}

impl<'a, W> RootedTree<'a, W> {
    pub(crate) fn new(tree: &'a Tree<W>, root: Node) -> Result<Self> {
        let n = tree.node_count();
        if root >= n {
            return Err(TreeError::NodeOutOfRange { node: root, nodes: n });
        }
        let mut order = Vec::with_capacity(n);
        let mut parent = vec![NONE; n];
        let mut parent_slot = vec![NONE; n];
        let mut seen = vec![false; n];
        seen[root] = true;
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            order.push(u);
            let mut skipped_parent = false;
            for (slot, v) in tree.neighbor_slots(u) {
                if v == parent[u] && !skipped_parent {
                    skipped_parent = true;
                    continue;
                }
                if seen[v] {
                    return Err(if v == parent[u] || parent[v] == u {
                        TreeError::DuplicateEdge {
                            u: u.min(v),
                            v: u.max(v),
                        }
                    } else {
                        TreeError::Cycle { u, v }
                    });
                }
                seen[v] = true;
                parent[v] = u;
                parent_slot[v] = slot;
                stack.push(v);
            }
        }
        if order.len() < n {
            return Err(TreeError::Disconnected {
                reached: order.len(),
                nodes: n,
            });
        }
        log::trace!("rooted tree on {n} nodes at {root}");
        Ok(Self {
            tree,
            root,
            order,
            parent,
            parent_slot,
        })
    }

    pub fn tree(&self) -> &'a Tree<W> {
        self.tree
    }

    pub fn root(&self) -> Node {
        self.root
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false, a tree has at least one node.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pre-order of the nodes, starting at the root.
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Post-order of the nodes (children before parents), ending at the root.
    pub fn post_order(&self) -> impl Iterator<Item = Node> + '_ {
        self.order.iter().rev().copied()
    }

    pub fn parent(&self, u: Node) -> Option<Node> {
        (self.parent[u] != NONE).then_some(self.parent[u])
    }

    /// Parent of u and the data of the edge leading to it.
    pub fn parent_edge(&self, u: Node) -> Option<(Node, &'a W)> {
        self.parent(u)
            .map(|p| (p, self.tree.slot_weight(self.parent_slot[u])))
    }

    /// Children of u together with the edge data.
    pub fn children(&self, u: Node) -> impl Iterator<Item = (Node, &'a W)> + '_ {
        let p = self.parent[u];
        self.tree.neighbors(u).filter(move |&(v, _)| v != p)
    }

    pub fn is_leaf(&self, u: Node) -> bool {
        self.children(u).next().is_none()
    }
}

/// Trees higher than this are printed flat, one `node <- parent` line each.
/// `TreeBuilder` nests its output, so its cost grows with the height.
const NESTED_DEBUG_DEPTH: usize = 64;

enum Visit {
    Enter(Node),
    Exit,
}

impl<W> RootedTree<'_, W> {
    /// Number of edges on the longest path down from the root.
    pub fn height(&self) -> usize {
        let mut depth = vec![0; self.len()];
        for &u in &self.order[1..] {
            depth[u] = depth[self.parent[u]] + 1;
        }
        depth.into_iter().max().unwrap_or(0)
    }
}

impl<W: Debug> RootedTree<'_, W> {
    fn nested_fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!("RootedTree at {}", self.root));
        let mut stack = vec![Visit::Enter(self.root)];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(u) => {
                    match self.parent_edge(u) {
                        Some((_, w)) => builder.add_leaf(&format!("{u} [{w:?}]")),
                        None => builder.add_leaf(&format!("{u}")),
                    }
                    builder.enter();
                    stack.push(Visit::Exit);
                    stack.extend(self.children(u).map(|(v, _)| Visit::Enter(v)));
                }
                Visit::Exit => {
                    builder.exit();
                }
            }
        }
        writeln!(f, "{}", builder.string())
    }

    fn flat_fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "RootedTree at {}", self.root)?;
        for &u in &self.order[1..] {
            if let Some((p, w)) = self.parent_edge(u) {
                writeln!(f, "{u} <- {p} [{w:?}]")?;
            }
        }
        Ok(())
    }
}

impl<W: Debug> Debug for RootedTree<'_, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.height() <= NESTED_DEBUG_DEPTH {
            self.nested_fmt(f)
        } else {
            self.flat_fmt(f)
        }
    }
}
