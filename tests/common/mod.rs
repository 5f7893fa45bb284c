#![allow(dead_code)]

use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use scopeguard::{OnUnwind, ScopeGuard};
use tree_reroot::{EdgeWeight, Node, Tree};

pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Logs the value if the test panics while it is alive.
pub fn guard<T: std::fmt::Debug>(t: T) -> ScopeGuard<T, impl FnOnce(T), OnUnwind> {
    scopeguard::guard_on_unwind(t, |t| log::error!("Crash with {t:?}"))
}

/// Distances from `src` by walking the tree with a stack.
pub fn distances_from<W: EdgeWeight>(tree: &Tree<W>, src: Node) -> Vec<i64> {
    let mut dist = vec![-1; tree.node_count()];
    dist[src] = 0;
    let mut stack = vec![src];
    while let Some(u) = stack.pop() {
        for (v, w) in tree.neighbors(u) {
            if dist[v] < 0 {
                dist[v] = dist[u] + w.weight();
                stack.push(v);
            }
        }
    }
    dist
}

pub fn all_distances<W: EdgeWeight>(tree: &Tree<W>) -> Vec<Vec<i64>> {
    (0..tree.node_count())
        .map(|u| distances_from(tree, u))
        .collect()
}

/// Nodes on the path from u to v, both included.
pub fn path_nodes<W>(tree: &Tree<W>, u: Node, v: Node) -> Vec<Node> {
    let rooted = tree.rooted_at(u).unwrap();
    let mut path = vec![v];
    let mut cur = v;
    while let Some(p) = rooted.parent(cur) {
        path.push(p);
        cur = p;
    }
    path
}

/// Node subsets of a small tree as bit masks, with their total weight.
pub fn subsets(weights: &[i64]) -> impl Iterator<Item = (u32, i64)> + '_ {
    (0..1u32 << weights.len()).map(|mask| {
        let total = (0..weights.len())
            .filter(|&i| mask >> i & 1 == 1)
            .map(|i| weights[i])
            .sum();
        (mask, total)
    })
}

pub fn has(mask: u32, u: Node) -> bool {
    mask >> u & 1 == 1
}
