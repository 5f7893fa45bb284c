use thiserror::Error;

use crate::tree::Node;

/// Reasons a tree (or the input describing it) is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("a tree needs at least one node")]
    Empty,

    #[error("a tree on {nodes} nodes needs one edge fewer than nodes, got {edges} edges")]
    EdgeCount { nodes: usize, edges: usize },

    #[error("node {node} is out of range for a tree on {nodes} nodes")]
    NodeOutOfRange { node: Node, nodes: usize },

    #[error("self loop on node {node}")]
    SelfLoop { node: Node },

    #[error("edge {u}-{v} appears more than once")]
    DuplicateEdge { u: Node, v: Node },

    #[error("edge {u}-{v} closes a cycle")]
    Cycle { u: Node, v: Node },

    #[error("weight of edge {u}-{v} does not fit in an i64")]
    WeightOutOfRange { u: Node, v: Node },

    #[error("only {reached} of {nodes} nodes are connected")]
    Disconnected { reached: usize, nodes: usize },

    #[error("expected {expected} node weights, got {found}")]
    WeightCount { expected: usize, found: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, TreeError>;
