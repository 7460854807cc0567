use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use log::{debug, trace};

use super::observer::{NoopObserver, SearchEvent, SearchObserver};
use super::path::{Path, reconstruct_path};
use crate::utils::error::{Error, Result};
use crate::utils::geom::Point2;

/// Frontier entry. `seq` only breaks ties between equal priorities so that
/// the earlier push pops first; it never takes part in cost arithmetic.
struct Entry<N> {
    priority: u64,
    seq: u64,
    node: N,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<N> Eq for Entry<N> {}

impl<N> Ord for Entry<N> {
    // Reversed for a min-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Outcome<N> {
    costs: HashMap<N, u64>,
    predecessors: HashMap<N, Option<N>>,
    explored: usize,
}

/// Best-first search shared by Dijkstra (`heuristic` = 0) and A*.
///
/// Costs absent from `costs` are infinite. A neighbour is relaxed only on a
/// strict improvement, which re-pushes it; older entries for the same node
/// are skipped once it is closed. Returns `true` alongside the outcome when
/// `goal` was popped.
fn best_first<N, F, I, H, O>(
    kind: &str,
    start: N,
    goal: Option<&N>,
    mut successors: F,
    mut heuristic: H,
    observer: &mut O,
) -> (Outcome<N>, bool)
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
    H: FnMut(&N) -> u64,
    O: SearchObserver<N> + ?Sized,
{
    let mut costs = HashMap::from([(start.clone(), 0u64)]);
    let mut predecessors = HashMap::from([(start.clone(), None)]);
    let mut closed = HashSet::new();
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    let mut explored = 0;

    open.push(Entry {
        priority: heuristic(&start),
        seq,
        node: start,
    });

    while let Some(Entry { node: current, .. }) = open.pop() {
        if !closed.insert(current.clone()) {
            continue;
        }
        explored += 1;
        trace!("{kind}: expanding node #{explored}");
        observer.observe(SearchEvent::Expand { node: &current });

        if goal == Some(&current) {
            let outcome = Outcome {
                costs,
                predecessors,
                explored,
            };
            return (outcome, true);
        }

        let Some(&cost) = costs.get(&current) else {
            continue;
        };
        for (next, weight) in successors(&current) {
            if closed.contains(&next) {
                continue;
            }
            let tentative = cost.saturating_add(weight);
            if costs.get(&next).is_none_or(|&known| tentative < known) {
                observer.observe(SearchEvent::Discover {
                    node: &next,
                    from: &current,
                });
                costs.insert(next.clone(), tentative);
                predecessors.insert(next.clone(), Some(current.clone()));
                seq += 1;
                open.push(Entry {
                    priority: tentative.saturating_add(heuristic(&next)),
                    seq,
                    node: next,
                });
            }
        }
    }

    let outcome = Outcome {
        costs,
        predecessors,
        explored,
    };
    (outcome, false)
}

fn to_path<N>(kind: &str, goal: &N, outcome: Outcome<N>, reached: bool) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
{
    if !reached {
        debug!(
            "{kind}: frontier exhausted after {} nodes, goal unreachable",
            outcome.explored
        );
        return Err(Error::NoPathFound);
    }
    let nodes = reconstruct_path(goal, &outcome.predecessors)?;
    let cost = outcome.costs.get(goal).copied().ok_or(Error::NoPathFound)?;
    debug!(
        "{kind}: reached goal at cost {cost}, {} nodes expanded",
        outcome.explored
    );
    Ok(Path {
        nodes,
        cost,
        explored: outcome.explored,
    })
}

/// Cheapest path by Dijkstra's algorithm. Weights must be non-negative,
/// which `u64` guarantees.
pub fn dijkstra<N, F, I>(start: N, goal: N, successors: F) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
{
    dijkstra_with(start, goal, successors, &mut NoopObserver)
}

pub fn dijkstra_with<N, F, I, O>(
    start: N,
    goal: N,
    successors: F,
    observer: &mut O,
) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
    O: SearchObserver<N> + ?Sized,
{
    let (outcome, reached) = best_first("dijkstra", start, Some(&goal), successors, |_| 0, observer);
    to_path("dijkstra", &goal, outcome, reached)
}

/// Cheapest path by A*.
///
/// The result is optimal when `heuristic` never overestimates the remaining
/// cost and never drops by more than an edge weight across an edge.
pub fn astar<N, F, I, H>(start: N, goal: N, successors: F, heuristic: H) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
    H: FnMut(&N) -> u64,
{
    astar_with(start, goal, successors, heuristic, &mut NoopObserver)
}

pub fn astar_with<N, F, I, H, O>(
    start: N,
    goal: N,
    successors: F,
    heuristic: H,
    observer: &mut O,
) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
    H: FnMut(&N) -> u64,
    O: SearchObserver<N> + ?Sized,
{
    let (outcome, reached) = best_first("astar", start, Some(&goal), successors, heuristic, observer);
    to_path("astar", &goal, outcome, reached)
}

/// Cheapest cost from `start` to every reachable node.
pub fn dijkstra_all<N, F, I>(start: N, successors: F) -> HashMap<N, u64>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, u64)>,
{
    let (outcome, _) = best_first("dijkstra", start, None, successors, |_| 0, &mut NoopObserver);
    debug!("dijkstra: {} nodes reachable", outcome.costs.len());
    outcome.costs
}

/// Manhattan distance to `goal`, admissible for unit-cost 4-connected moves.
pub fn manhattan_heuristic(goal: Point2) -> impl Fn(&Point2) -> u64 {
    move |p| p.manhattan(goal)
}
