use common::{all_distances, guard, has, init_logger, path_nodes, subsets};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tree_reroot::{
    generate,
    stats::{
        and_path_sum, diameter, eccentricities, max_flow_to_leaves, max_independent_set,
        max_matching, min_dominating_set, min_vertex_cover, on_diameter, or_path_sum,
        sum_of_distances, tree_knapsack, vertices_on_diameter, xor_path_sum, xor_path_xor_sum,
        Item,
    },
    EdgeWeight, Node, Tree,
};

mod common;

const SEED: u64 = 31415;

fn small_trees(rng: &mut StdRng) -> Vec<Tree<u32>> {
    (1..=11)
        .flat_map(|n| (0..6).map(move |_| n))
        .map(|n| generate::random_weighted_tree(n, rng, |rng| rng.gen_range(1..=4)).unwrap())
        .collect()
}

fn edge_weight<W: EdgeWeight>(tree: &Tree<W>, u: Node, v: Node) -> W {
    tree.neighbors(u)
        .find(|&(x, _)| x == v)
        .map(|(_, w)| w.clone())
        .unwrap()
}

#[test]
fn distances_against_all_pairs() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(SEED);
    for t in small_trees(&mut rng) {
        let g = guard(t);
        let t = &*g;
        let n = t.node_count();
        let d = all_distances(t);
        let root = n / 2;
        let r = t.rooted_at(root).unwrap();

        let sums: Vec<i64> = d.iter().map(|row| row.iter().sum()).collect();
        assert_eq!(sum_of_distances(&r), sums);
        let ecc: Vec<i64> = d.iter().map(|row| *row.iter().max().unwrap()).collect();
        assert_eq!(eccentricities(&r), ecc);

        let length = *ecc.iter().max().unwrap();
        let count = if n == 1 {
            1
        } else {
            (0..n)
                .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
                .filter(|&(u, v)| d[u][v] == length)
                .count() as u64
        };
        let found = diameter(&r);
        assert_eq!((found.length, found.count), (length, count));

        let mut on = vec![false; n];
        for u in 0..n {
            for v in 0..n {
                if d[u][v] == length {
                    for x in path_nodes(t, u, v) {
                        on[x] = true;
                    }
                }
            }
        }
        assert_eq!(on_diameter(&r), on);
        assert_eq!(vertices_on_diameter(&r), on.iter().filter(|&&x| x).count());
    }
}

#[test]
fn diameter_of_paths_and_stars() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(SEED);
    for n in 2..40u64 {
        let path = generate::shuffled_path(n as usize, &mut rng).unwrap();
        let d = diameter(&path.rooted());
        assert_eq!((d.length, d.count), (n as i64 - 1, 1));
        assert_eq!(vertices_on_diameter(&path.rooted()), n as usize);

        let star = generate::star(n as usize).unwrap();
        let d = diameter(&star.rooted_at(n as usize - 1).unwrap());
        if n == 2 {
            assert_eq!((d.length, d.count), (1, 1));
        } else {
            assert_eq!((d.length, d.count), (2, (n - 1) * (n - 2) / 2));
        }
    }
}

fn is_independent<W>(t: &Tree<W>, mask: u32) -> bool {
    t.edges().all(|(u, v, _)| !(has(mask, u) && has(mask, v)))
}

fn is_cover<W>(t: &Tree<W>, mask: u32) -> bool {
    t.edges().all(|(u, v, _)| has(mask, u) || has(mask, v))
}

fn is_dominating<W>(t: &Tree<W>, mask: u32) -> bool {
    (0..t.node_count()).all(|u| has(mask, u) || t.neighbors(u).any(|(v, _)| has(mask, v)))
}

#[test]
fn node_sets_against_subsets() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    for t in small_trees(&mut rng) {
        let n = t.node_count();
        let weights: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=9)).collect();
        let _g = guard(weights.clone());
        let r = t.rooted_at(rng.gen_range(0..n)).unwrap();

        let mis = subsets(&weights)
            .filter(|&(m, _)| is_independent(&t, m))
            .map(|(_, w)| w)
            .max()
            .unwrap();
        let vc = subsets(&weights)
            .filter(|&(m, _)| is_cover(&t, m))
            .map(|(_, w)| w)
            .min()
            .unwrap();
        let ds = subsets(&weights)
            .filter(|&(m, _)| is_dominating(&t, m))
            .map(|(_, w)| w)
            .min()
            .unwrap();
        assert_eq!(max_independent_set(&r, &weights), Ok(mis));
        assert_eq!(min_vertex_cover(&r, &weights), Ok(vc));
        assert_eq!(min_dominating_set(&r, &weights), Ok(ds));
    }
}

#[test]
fn unit_weights_on_paths() {
    for n in 1..50usize {
        let t = generate::path(n).unwrap();
        let ones = vec![1; n];
        let r = t.rooted_at(n / 3).unwrap();
        assert_eq!(max_independent_set(&r, &ones), Ok(n.div_ceil(2) as i64));
        assert_eq!(min_vertex_cover(&r, &ones), Ok((n / 2) as i64));
        assert_eq!(min_dominating_set(&r, &ones), Ok(n.div_ceil(3) as i64));
        assert_eq!(max_matching(&r), (n / 2) as i64);
    }
}

#[test]
fn matching_against_edge_subsets() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    for t in small_trees(&mut rng) {
        let g = guard(t);
        let t = &*g;
        let edges: Vec<(Node, Node, i64)> =
            t.edges().map(|(u, v, w)| (u, v, w.weight())).collect();
        let best = (0..1u32 << edges.len())
            .filter_map(|mask| {
                let mut used = 0u32;
                let mut total = 0;
                for (i, &(u, v, w)) in edges.iter().enumerate() {
                    if has(mask, i) {
                        if has(used, u) || has(used, v) {
                            return None;
                        }
                        used |= 1 << u | 1 << v;
                        total += w;
                    }
                }
                Some(total)
            })
            .max()
            .unwrap();
        assert_eq!(max_matching(&t.rooted()), best);
    }
}

#[test]
fn bitwise_path_sums_against_pairs() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    for t in small_trees(&mut rng) {
        let g = guard(t);
        let t = &*g;
        let n = t.node_count();
        let values: Vec<u32> = (0..n).map(|_| rng.gen_range(0..64)).collect();
        let wide: Vec<u64> = values.iter().map(|&v| u64::from(v) << 20 | 5).collect();
        let r = t.rooted_at(rng.gen_range(0..n)).unwrap();

        let (mut and, mut or, mut xor_edges, mut xor_nodes) = (0u128, 0u128, 0u128, 0u64);
        for u in 0..n {
            for v in u..n {
                let path = path_nodes(t, u, v);
                and += u128::from(path.iter().fold(u32::MAX, |a, &x| a & values[x]));
                or += u128::from(path.iter().fold(0, |a, &x| a | values[x]));
                if u != v {
                    xor_edges += u128::from(
                        path.windows(2)
                            .fold(0u32, |a, e| a ^ edge_weight(t, e[0], e[1])),
                    );
                    xor_nodes ^= path.iter().fold(0, |a, &x| a ^ wide[x]);
                }
            }
        }
        assert_eq!(and_path_sum(&r, &values), Ok(and));
        assert_eq!(or_path_sum(&r, &values), Ok(or));
        assert_eq!(xor_path_sum(&r), xor_edges);
        assert_eq!(xor_path_xor_sum(&r, &wide), Ok(xor_nodes));
    }
}

#[test]
fn flow_from_every_source() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(SEED + 4);
    for t in small_trees(&mut rng) {
        let g = guard(t);
        let t = &*g;
        let n = t.node_count();
        let expected: Vec<i64> = (0..n)
            .map(|s| {
                let r = t.rooted_at(s).unwrap();
                let mut drain = vec![0i64; n];
                for u in r.post_order() {
                    drain[u] = r
                        .children(u)
                        .map(|(v, w)| {
                            let cap = w.weight();
                            if r.is_leaf(v) {
                                cap
                            } else {
                                cap.min(drain[v])
                            }
                        })
                        .sum();
                }
                drain[s]
            })
            .collect();
        assert_eq!(max_flow_to_leaves(&t.rooted()), expected);
    }
}

#[test]
fn knapsack_against_closed_subsets() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    for t in small_trees(&mut rng) {
        let n = t.node_count();
        let items: Vec<Item> = (0..n)
            .map(|_| Item {
                weight: rng.gen_range(0..=3),
                value: rng.gen_range(0..=10),
            })
            .collect();
        let _g = guard(items.clone());
        let root = rng.gen_range(0..n);
        let r = t.rooted_at(root).unwrap();
        for capacity in 0..=8 {
            let picked = |m: u32| (0..n).filter(move |&u| has(m, u));
            let best = (0..1u32 << n)
                .filter(|&m| has(m, root))
                .filter(|&m| picked(m).all(|u| r.parent(u).map_or(true, |p| has(m, p))))
                .filter(|&m| picked(m).map(|u| items[u].weight).sum::<usize>() <= capacity)
                .map(|m| picked(m).map(|u| items[u].value).sum::<i64>())
                .max()
                .unwrap_or(0);
            assert_eq!(tree_knapsack(&r, &items, capacity), Ok(best), "capacity {capacity}");
        }
    }
}

#[test]
fn wrong_input_lengths() {
    let t = generate::path(3).unwrap();
    let r = t.rooted();
    assert!(max_independent_set(&r, &[1, 2]).is_err());
    assert!(and_path_sum(&r, &[1, 2, 3, 4]).is_err());
    assert!(xor_path_xor_sum(&r, &[]).is_err());
    assert!(tree_knapsack(&r, &[], 3).is_err());
}
