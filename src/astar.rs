//! A best-first A* search over an arbitrary graph described by closures, in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//!
//! Unlike a binary heap based frontier, the open set here is kept in discovery order and scanned
//! linearly for the lowest `f`. The first node with the minimal `f` wins, which makes the
//! returned path depend only on the order in which successors are generated. A node that is
//! reached more cheaply while still on the frontier is updated in place and keeps its position
//! in the scan order.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use log::debug;
use num_traits::Zero;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Bookkeeping for a discovered node, only alive for the duration of one search.
struct Scratch<C> {
    parent: usize,
    g: C,
    h: C,
    f: C,
}

fn reverse_path<N, C>(nodes: &FxIndexMap<N, Scratch<C>>, goal: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut ix = goal;
    while let Some((node, scratch)) = nodes.get_index(ix) {
        path.push(node.clone());
        ix = scratch.parent;
    }
    path.reverse();
    path
}

/// Searches from `start` until `success` holds for a selected node and returns the path
/// (both ends included) together with its cost, or [None] once the open set is exhausted.
///
/// `heuristic` must never overestimate the remaining cost for the result to be optimal.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut nodes: FxIndexMap<N, Scratch<C>> = FxIndexMap::default();
    let h = heuristic(start);
    nodes.insert(
        start.clone(),
        Scratch {
            parent: usize::MAX,
            g: Zero::zero(),
            h,
            f: h,
        },
    );
    let mut open: FxIndexSet<usize> = FxIndexSet::default();
    open.insert(0);
    let mut closed: FxHashSet<usize> = FxHashSet::default();

    while let Some(slot) = open.iter().position_min_by_key(|&&ix| nodes[ix].f) {
        let Some(current) = open.shift_remove_index(slot) else {
            break;
        };
        let (node, g) = match nodes.get_index(current) {
            Some((node, scratch)) => (node.clone(), scratch.g),
            None => break,
        };
        if success(&node) {
            debug!("Goal reached after expanding {} nodes", closed.len());
            return Some((reverse_path(&nodes, current), g));
        }
        closed.insert(current);

        for (successor, move_cost) in successors(&node) {
            let tentative_g = g + move_cost;
            match nodes.entry(successor) {
                Vacant(e) => {
                    let h = heuristic(e.key());
                    let ix = e.index();
                    e.insert(Scratch {
                        parent: current,
                        g: tentative_g,
                        h,
                        f: tentative_g + h,
                    });
                    open.insert(ix);
                }
                Occupied(mut e) => {
                    // Anything discovered and not closed is still on the frontier
                    if closed.contains(&e.index()) {
                        continue;
                    }
                    let scratch = e.get_mut();
                    if tentative_g < scratch.g {
                        scratch.g = tentative_g;
                        scratch.f = tentative_g + scratch.h;
                        scratch.parent = current;
                    }
                }
            }
        }
    }
    debug!("Open set exhausted after expanding {} nodes", closed.len());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::Point;

    fn edges(node: &char) -> Vec<(char, i32)> {
        match node {
            'a' => vec![('b', 1), ('c', 1)],
            'b' => vec![('g', 1)],
            'c' => vec![('g', 1)],
            _ => vec![],
        }
    }

    #[test]
    fn start_is_goal() {
        let result = astar(&'a', edges, |_| 0, |n| *n == 'a');
        assert_eq!(result, Some((vec!['a'], 0)));
    }

    #[test]
    fn ties_go_to_the_first_discovered_node() {
        let result = astar(&'a', edges, |_| 0, |n| *n == 'g');
        assert_eq!(result, Some((vec!['a', 'b', 'g'], 2)));
        let reversed = |n: &char| {
            let mut e = edges(n);
            e.reverse();
            e
        };
        let result = astar(&'a', reversed, |_| 0, |n| *n == 'g');
        assert_eq!(result, Some((vec!['a', 'c', 'g'], 2)));
    }

    #[test]
    fn cheaper_route_to_frontier_node_replaces_parent() {
        // a -> b is expensive, a -> c -> b is cheaper and found while b is on the frontier
        let successors = |n: &char| match n {
            'a' => vec![('b', 5), ('c', 1)],
            'c' => vec![('b', 1)],
            'b' => vec![('g', 1)],
            _ => vec![],
        };
        let result = astar(&'a', successors, |_| 0, |n| *n == 'g');
        assert_eq!(result, Some((vec!['a', 'c', 'b', 'g'], 3)));
    }

    #[test]
    fn exhausted_open_set() {
        let result = astar(&'a', edges, |_| 0, |n| *n == 'z');
        assert_eq!(result, None);
    }

    #[test]
    fn never_expands_a_node_twice() {
        let grid: Grid = "....\n.##.\n....\n.#..".parse().unwrap();
        let goal = Point::new(3, 3);
        let mut expanded = Vec::new();
        let result = astar(
            &Point::new(0, 0),
            |p: &Point| {
                expanded.push(*p);
                grid.neighbors(p)
                    .unwrap()
                    .into_iter()
                    .map(|cell| (cell.position(), 1))
                    .collect::<Vec<_>>()
            },
            |p| p.manhattan_distance(&goal),
            |p| *p == goal,
        );
        let (path, cost) = result.unwrap();
        assert_eq!(cost, 6);
        assert_eq!(path.len(), 7);
        let unique = expanded.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), expanded.len());
    }
}
