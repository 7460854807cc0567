use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use log::{debug, trace};

use super::observer::{NoopObserver, SearchEvent, SearchObserver};
use super::path::{Path, reconstruct_path};
use crate::utils::error::{Error, Result};

/// Order in which discovered nodes are expanded.
trait Frontier<N> {
    fn push(&mut self, node: N);
    fn pop(&mut self) -> Option<N>;
}

struct Fifo<N>(VecDeque<N>);

impl<N> Frontier<N> for Fifo<N> {
    fn push(&mut self, node: N) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<N> {
        self.0.pop_front()
    }
}

struct Lifo<N>(Vec<N>);

impl<N> Frontier<N> for Lifo<N> {
    fn push(&mut self, node: N) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<N> {
        self.0.pop()
    }
}

/// Shared loop of breadth- and depth-first search.
///
/// A node is recorded in `predecessors` the moment it is first discovered and
/// is never pushed again, so its predecessor never changes. The search ends
/// when the goal is popped, not when it is discovered.
fn unweighted_search<N, F, I, Q, O>(
    kind: &str,
    start: N,
    goal: N,
    mut neighbors: F,
    mut frontier: Q,
    observer: &mut O,
) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    Q: Frontier<N>,
    O: SearchObserver<N> + ?Sized,
{
    let mut predecessors: HashMap<N, Option<N>> = HashMap::new();
    predecessors.insert(start.clone(), None);
    frontier.push(start);
    let mut explored = 0;

    while let Some(current) = frontier.pop() {
        explored += 1;
        trace!("{kind}: expanding node #{explored}");
        observer.observe(SearchEvent::Expand { node: &current });

        if current == goal {
            let nodes = reconstruct_path(&goal, &predecessors)?;
            let cost = nodes.len().saturating_sub(1) as u64;
            debug!("{kind}: reached goal in {cost} steps, {explored} nodes expanded");
            return Ok(Path {
                nodes,
                cost,
                explored,
            });
        }

        for next in neighbors(&current) {
            if predecessors.contains_key(&next) {
                continue;
            }
            observer.observe(SearchEvent::Discover {
                node: &next,
                from: &current,
            });
            predecessors.insert(next.clone(), Some(current.clone()));
            frontier.push(next);
        }
    }

    debug!("{kind}: frontier exhausted after {explored} nodes, goal unreachable");
    Err(Error::NoPathFound)
}

/// Breadth-first search. The returned path has the fewest possible edges.
pub fn bfs<N, F, I>(start: N, goal: N, neighbors: F) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    bfs_with(start, goal, neighbors, &mut NoopObserver)
}

pub fn bfs_with<N, F, I, O>(start: N, goal: N, neighbors: F, observer: &mut O) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    O: SearchObserver<N> + ?Sized,
{
    unweighted_search("bfs", start, goal, neighbors, Fifo(VecDeque::new()), observer)
}

/// Depth-first search. Finds *a* path, usually not the shortest; the order
/// of `neighbors` decides which one.
pub fn dfs<N, F, I>(start: N, goal: N, neighbors: F) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    dfs_with(start, goal, neighbors, &mut NoopObserver)
}

pub fn dfs_with<N, F, I, O>(start: N, goal: N, neighbors: F, observer: &mut O) -> Result<Path<N>>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    O: SearchObserver<N> + ?Sized,
{
    unweighted_search("dfs", start, goal, neighbors, Lifo(Vec::new()), observer)
}

/// Edge count from `start` to every reachable node, `start` included at 0.
pub fn bfs_distances<N, F, I>(start: N, mut neighbors: F) -> HashMap<N, u64>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut distances = HashMap::new();
    distances.insert(start.clone(), 0);
    let mut queue = VecDeque::from([(start, 0u64)]);

    while let Some((current, distance)) = queue.pop_front() {
        for next in neighbors(&current) {
            if distances.contains_key(&next) {
                continue;
            }
            distances.insert(next.clone(), distance + 1);
            queue.push_back((next, distance + 1));
        }
    }

    debug!("bfs: {} nodes reachable", distances.len());
    distances
}
