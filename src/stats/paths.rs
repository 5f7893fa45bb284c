//! Bitwise sums over all paths of a tree.
//!
//! `and_path_sum` and `or_path_sum` count single-node paths too. The xor sums
//! only look at paths joining two different nodes.

use super::check_len;
use crate::{
    error::Result,
    reroot::{aggregate, SubtreeDp},
    rooted::RootedTree,
    tree::Node,
};

/// Paths whose nodes all have one bit set.
struct OnesPaths<'v> {
    values: &'v [u32],
    bit: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Chains {
    /// Such paths going down from the subtree root, including the root alone.
    down: u64,
    /// Such paths inside the subtree.
    paths: u64,
}

impl<W> SubtreeDp<W> for OnesPaths<'_> {
    type Agg = Chains;
    fn init(&self, u: Node) -> Chains {
        let one = u64::from(self.values[u] >> self.bit & 1);
        Chains {
            down: one,
            paths: one,
        }
    }
    fn pull(&self, parent: &mut Chains, child: &Chains, _: &W) {
        parent.paths += child.paths;
        // down is 0 exactly when the parent's bit is clear.
        if parent.down > 0 {
            parent.paths += parent.down * child.down;
            parent.down += child.down;
        }
    }
}

fn ones_paths<W>(tree: &RootedTree<'_, W>, values: &[u32], bit: u32) -> u64 {
    aggregate(tree, &OnesPaths { values, bit })[tree.root()].paths
}

/// Sum over all paths of the bitwise and of their node values.
pub fn and_path_sum<W>(tree: &RootedTree<'_, W>, values: &[u32]) -> Result<u128> {
    check_len(tree, values.len())?;
    Ok((0..u32::BITS)
        .map(|bit| u128::from(ones_paths(tree, values, bit)) << bit)
        .sum())
}

/// Sum over all paths of the bitwise or of their node values.
pub fn or_path_sum<W>(tree: &RootedTree<'_, W>, values: &[u32]) -> Result<u128> {
    check_len(tree, values.len())?;
    let n = tree.len() as u64;
    let all = n * (n + 1) / 2;
    let flipped: Vec<u32> = values.iter().map(|v| !v).collect();
    Ok((0..u32::BITS)
        .map(|bit| u128::from(all - ones_paths(tree, &flipped, bit)) << bit)
        .sum())
}

/// Sum over unordered pairs of nodes of the xor of the edge values between
/// them. The xor of a path is the xor of the two root prefixes.
pub fn xor_path_sum<W: Copy + Into<u64>>(tree: &RootedTree<'_, W>) -> u128 {
    let mut prefix = vec![0u64; tree.len()];
    for &u in &tree.order()[1..] {
        if let Some((p, &w)) = tree.parent_edge(u) {
            prefix[u] = prefix[p] ^ Into::<u64>::into(w);
        }
    }
    let n = tree.len() as u128;
    (0..u64::BITS)
        .map(|bit| {
            let ones = prefix.iter().filter(|&&x| x >> bit & 1 == 1).count() as u128;
            (ones * (n - ones)) << bit
        })
        .sum()
}

/// Pairs of nodes whose path goes through the subtree root and stays inside
/// the subtree.
struct Through;

#[derive(Debug, Clone, Copy)]
struct Crossings {
    size: u64,
    pairs: u64,
}

impl<W> SubtreeDp<W> for Through {
    type Agg = Crossings;
    fn init(&self, _: Node) -> Crossings {
        Crossings { size: 1, pairs: 0 }
    }
    fn pull(&self, parent: &mut Crossings, child: &Crossings, _: &W) {
        parent.pairs += parent.size * child.size;
        parent.size += child.size;
    }
}

/// Xor over all paths with at least two nodes of the xor of their node
/// values. A node matters iff an odd number of such paths go through it.
pub fn xor_path_xor_sum<W>(tree: &RootedTree<'_, W>, values: &[u64]) -> Result<u64> {
    check_len(tree, values.len())?;
    let n = tree.len() as u64;
    Ok(aggregate(tree, &Through)
        .into_iter()
        .zip(values)
        .filter(|(c, _)| (c.pairs + c.size * (n - c.size)) % 2 == 1)
        .fold(0, |acc, (_, v)| acc ^ v))
}
