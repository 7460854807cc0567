use std::collections::HashMap;
use std::hash::Hash;

use crate::utils::error::{Error, Result};

/// A path found by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N> {
    /// Start to goal, both included
    pub nodes: Vec<N>,
    /// Sum of edge weights (edge count for unweighted searches)
    pub cost: u64,
    /// Nodes expanded before the goal was reached, goal included
    pub explored: usize,
}

impl<N> Path<N> {
    /// Number of edges on the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }
}

/// Follow `predecessors` back from `goal` and return the chain start-first.
///
/// The start node is the one mapped to `None`. A goal that never entered the
/// map, or a chain that breaks or loops, gives [`Error::NoPathFound`].
pub fn reconstruct_path<N>(goal: &N, predecessors: &HashMap<N, Option<N>>) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    let mut nodes = vec![goal.clone()];
    let mut current = predecessors.get(goal).ok_or(Error::NoPathFound)?;
    while let Some(node) = current {
        if nodes.len() > predecessors.len() {
            return Err(Error::NoPathFound);
        }
        nodes.push(node.clone());
        current = predecessors.get(node).ok_or(Error::NoPathFound)?;
    }
    nodes.reverse();
    Ok(nodes)
}
