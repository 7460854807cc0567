use log::debug;

use crate::utils::graph::{Distance, DistanceMatrix};

/// One candidate update considered by Floyd-Warshall: is `i -> j` shorter
/// when routed through `k`?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxation {
    pub k: usize,
    pub i: usize,
    pub j: usize,
    /// Best `i -> j` distance before this step
    pub current: Distance,
    /// `i -> k -> j`
    pub through: Distance,
}

impl Relaxation {
    #[inline]
    pub fn improves(&self) -> bool {
        self.through < self.current
    }
}

/// First vertex to step to on a shortest path, per `(from, to)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextHop {
    size: usize,
    next: Vec<Option<usize>>,
}

impl NextHop {
    fn from_matrix(matrix: &DistanceMatrix) -> Self {
        let size = matrix.len();
        let mut next = vec![None; size * size];
        for i in 0..size {
            for j in 0..size {
                if matrix.get(i, j).is_finite() {
                    next[i * size + j] = Some(j);
                }
            }
        }
        Self { size, next }
    }

    /// Next vertex after `from` on the way to `to`, `None` if unreachable.
    #[inline]
    pub fn next(&self, from: usize, to: usize) -> Option<usize> {
        if from < self.size && to < self.size {
            self.next[from * self.size + to]
        } else {
            None
        }
    }

    /// Vertex sequence from `from` to `to`, both included.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.next(current, to)?;
            path.push(current);
            if path.len() > self.size {
                return None;
            }
        }
        Some(path)
    }
}

/// All-pairs shortest distances, in place. Entries must start as direct
/// edge lengths with a zero diagonal, as [`DistanceMatrix::new`] sets up.
pub fn floyd_warshall(matrix: &mut DistanceMatrix) {
    relax_all(matrix, None, |_| {});
}

/// [`floyd_warshall`] reporting every candidate relaxation, in `k`, `i`, `j`
/// order, before it is applied.
pub fn floyd_warshall_with<F>(matrix: &mut DistanceMatrix, observe: F)
where
    F: FnMut(&Relaxation),
{
    relax_all(matrix, None, observe);
}

/// [`floyd_warshall`] that also records next hops so that paths, not just
/// their lengths, can be read back.
pub fn floyd_warshall_with_paths(matrix: &mut DistanceMatrix) -> NextHop {
    let mut next = NextHop::from_matrix(matrix);
    relax_all(matrix, Some(&mut next), |_| {});
    next
}

fn relax_all<F>(matrix: &mut DistanceMatrix, mut next: Option<&mut NextHop>, mut observe: F)
where
    F: FnMut(&Relaxation),
{
    let n = matrix.len();
    let mut improved = 0usize;
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let step = Relaxation {
                    k,
                    i,
                    j,
                    current: matrix.get(i, j),
                    through: matrix.get(i, k) + matrix.get(k, j),
                };
                observe(&step);
                if step.improves() {
                    matrix.set(i, j, step.through);
                    if let Some(next) = next.as_deref_mut() {
                        next.next[i * n + j] = next.next[i * n + k];
                    }
                    improved += 1;
                }
            }
        }
    }
    debug!("floyd-warshall: {n} vertices, {improved} relaxations applied");
}
