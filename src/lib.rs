pub mod error;
pub mod generate;
pub mod input;
pub mod reroot;
pub mod rooted;
pub mod stats;
pub mod tree;

pub use error::{Result, TreeError};
pub use reroot::{
    aggregate, reroot, reroot_invertible, InvertibleDp, RerootDp, Rerooted, SubtreeDp,
};
pub use rooted::RootedTree;
pub use tree::{EdgeWeight, Node, Tree};
