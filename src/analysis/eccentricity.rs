use super::{Distance, IdIndex};
use crate::{graph::Graph, types::VId};
use std::collections::BTreeMap;

/// All-pairs shortest-path distances of a graph.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    index: IdIndex,
    dists: Vec<Distance>,
}

impl DistanceMatrix {
    /// Computes the distances with the Floyd-Warshall algorithm, in `O(n^3)` time.
    pub fn new<G: Graph + ?Sized>(graph: &G) -> Self {
        let index = IdIndex::new(graph);
        let n = index.len();
        let mut dists = vec![Distance::Infinite; n * n];
        for i in 0..n {
            dists[i * n + i] = Distance::ZERO;
        }
        for e in graph.edges() {
            if let (Some(i), Some(j)) = (index.index(e.source()), index.index(e.dest())) {
                dists[i * n + j] = Distance::Finite(1);
                dists[j * n + i] = Distance::Finite(1);
            }
        }
        for k in 0..n {
            for i in 0..n {
                let dik = dists[i * n + k];
                if !dik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = dik + dists[k * n + j];
                    if through_k < dists[i * n + j] {
                        dists[i * n + j] = through_k;
                    }
                }
            }
        }
        Self { index, dists }
    }

    pub fn order(&self) -> usize {
        self.index.len()
    }

    /// The distance between the vertices `u` and `v`, if both exist.
    pub fn get(&self, u: VId, v: VId) -> Option<Distance> {
        let (i, j) = (self.index.index(u)?, self.index.index(v)?);
        Some(self.dists[i * self.order() + j])
    }

    /// The largest distance from `u` to any vertex, if `u` exists.
    pub fn eccentricity(&self, u: VId) -> Option<Distance> {
        self.index.index(u).map(|i| self.row_max(i))
    }

    /// The eccentricity of every vertex, keyed by vertex id.
    pub fn eccentricities(&self) -> BTreeMap<VId, Distance> {
        (0..self.order())
            .map(|i| (self.index.id(i), self.row_max(i)))
            .collect()
    }

    fn row_max(&self, i: usize) -> Distance {
        let n = self.order();
        self.dists[i * n..(i + 1) * n]
            .iter()
            .copied()
            .max()
            .unwrap_or(Distance::ZERO)
    }
}

/// The all-pairs shortest-path distances of `graph`.
pub fn distances<G: Graph + ?Sized>(graph: &G) -> DistanceMatrix {
    DistanceMatrix::new(graph)
}

/// The eccentricity of every vertex of `graph`, keyed by vertex id.
///
/// A vertex that cannot reach every other vertex has eccentricity
/// [`Distance::Infinite`](enum.Distance.html#variant.Infinite), so on a disconnected
/// graph all eccentricities are infinite.
pub fn eccentricities<G: Graph + ?Sized>(graph: &G) -> BTreeMap<VId, Distance> {
    DistanceMatrix::new(graph).eccentricities()
}
