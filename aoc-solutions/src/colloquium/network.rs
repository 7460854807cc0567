use std::str::FromStr;

use log::debug;

use crate::utils::geom::Point2;
use crate::utils::graph::{DistanceMatrix, WeightedGraph};
use crate::utils::search::{self, NextHop, NoopObserver, Path, SearchObserver};
use crate::utils::{Error, Result};

/// Display name of vertex `index`: `A`..`Z`, then `AA`, `AB`, ...
pub fn vertex_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index;
    loop {
        label.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label.iter().rev().map(|&b| b as char).collect()
}

/// Small undirected weighted graph with positioned vertices.
///
/// Text form, blank lines ignored:
///
/// ```text
/// <vertices> <edges>
/// <x> <y>            one line per vertex
/// <a> <b> <weight>   one line per edge, 0-based vertex indices
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    graph: WeightedGraph,
}

fn parse_fields<const N: usize, T>(line_no: usize, line: &str) -> Result<[T; N]>
where
    T: FromStr + Copy + Default,
    T::Err: std::fmt::Display,
{
    let mut fields = [T::default(); N];
    let mut parts = line.split_whitespace();
    for field in fields.iter_mut() {
        let text = parts
            .next()
            .ok_or_else(|| Error::malformed(line_no, format!("expected {N} fields")))?;
        *field = text
            .parse()
            .map_err(|e| Error::malformed(line_no, format!("'{text}': {e}")))?;
    }
    if parts.next().is_some() {
        return Err(Error::malformed(line_no, format!("expected {N} fields")));
    }
    Ok(fields)
}

impl Network {
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, header) = lines
            .next()
            .ok_or_else(|| Error::malformed(0, "empty network"))?;
        let [vertex_count, edge_count] = parse_fields::<2, usize>(line_no, header)?;

        let mut vertices = Vec::new();
        for _ in 0..vertex_count {
            let (line_no, line) = lines
                .next()
                .ok_or_else(|| Error::malformed(0, format!("expected {vertex_count} vertices")))?;
            let [x, y] = parse_fields::<2, i64>(line_no, line)?;
            vertices.push(Point2::new(x, y));
        }

        let mut graph = WeightedGraph::new(vertices);
        for _ in 0..edge_count {
            let (line_no, line) = lines
                .next()
                .ok_or_else(|| Error::malformed(0, format!("expected {edge_count} edges")))?;
            let [a, b, weight] = parse_fields::<3, u64>(line_no, line)?;
            graph
                .add_edge(a as usize, b as usize, weight)
                .map_err(|_| Error::malformed(line_no, format!("edge {a}-{b} names an unknown vertex")))?;
        }

        if let Some((line_no, _)) = lines.next() {
            return Err(Error::malformed(line_no, "unexpected trailing line"));
        }

        debug!("parsed network with {vertex_count} vertices, {edge_count} edges");
        Ok(Self { graph })
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Labels joined by `->`, e.g. `A->B->C`.
    pub fn describe_path(&self, vertices: &[usize]) -> String {
        vertices
            .iter()
            .map(|&v| vertex_label(v))
            .collect::<Vec<_>>()
            .join("->")
    }

    /// Cheapest route between two vertices by Dijkstra's algorithm.
    /// Indices outside the network give [`Error::NoPathFound`].
    pub fn shortest_path(&self, start: usize, goal: usize) -> Result<Path<usize>> {
        self.shortest_path_with(start, goal, &mut NoopObserver)
    }

    pub fn shortest_path_with<O>(
        &self,
        start: usize,
        goal: usize,
        observer: &mut O,
    ) -> Result<Path<usize>>
    where
        O: SearchObserver<usize> + ?Sized,
    {
        if start >= self.len() || goal >= self.len() {
            return Err(Error::NoPathFound);
        }
        search::dijkstra_with(
            start,
            goal,
            |v: &usize| self.graph.neighbors(*v).collect::<Vec<_>>(),
            observer,
        )
    }

    /// Shortest distance between every pair of vertices by Floyd-Warshall.
    pub fn all_pairs(&self) -> DistanceMatrix {
        let mut matrix = self.graph.distance_matrix();
        search::floyd_warshall(&mut matrix);
        matrix
    }

    /// [`all_pairs`](Self::all_pairs) plus the next hops needed to list
    /// each route.
    pub fn all_pairs_with_paths(&self) -> (DistanceMatrix, NextHop) {
        let mut matrix = self.graph.distance_matrix();
        let next = search::floyd_warshall_with_paths(&mut matrix);
        (matrix, next)
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Network::parse(s)
    }
}
