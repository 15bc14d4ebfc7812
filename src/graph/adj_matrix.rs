use super::{Edge, Edges, Err, Graph, Result, Vertex, Vertices};
use crate::types::VId;
use std::collections::BTreeSet;

/// A graph with edges stored in a dense adjacency matrix.
///
/// Vertices are `0..order`. The matrix is kept row-major and symmetric:
///
/// ```text
///          0   1   2  ...  n-1
///       +---+---+---+-----+---+
///     0 | 0 | a | b | ... |   |
///       +---+---+---+-----+---+
///     1 | a | 0 | c | ... |   |
///       +---+---+---+-----+---+
///                 ...
/// ```
///
/// The diagonal is never set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    n: usize,
    matrix: Vec<bool>,
}

impl AdjMatrix {
    /// Create a graph of order `n` without edges.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            matrix: vec![false; n * n],
        }
    }

    /// Copy any graph into an adjacency matrix.
    ///
    /// Vertex `k` of the result is the `k`-th vertex of `graph.vertices()`.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        let ids: Vec<VId> = graph.vertices().map(|v| v.id()).collect();
        let mut res = Self::new(ids.len());
        for e in graph.edges() {
            match (
                ids.binary_search(&e.source()),
                ids.binary_search(&e.dest()),
            ) {
                (Ok(i), Ok(j)) => res.set(i, j),
                _ => unreachable!("edge {} has an endpoint outside the vertex set", e),
            }
        }
        res
    }

    /// Build a graph of order `n` from a list of vertex pairs.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VId, VId)>,
    {
        let mut res = Self::new(n);
        for (i, j) in edges {
            res.add_edge(i, j)?;
        }
        Ok(res)
    }

    fn in_bounds(&self, i: VId) -> bool {
        i < self.n
    }

    fn get(&self, i: VId, j: VId) -> bool {
        self.matrix[i * self.n + j]
    }

    fn set(&mut self, i: VId, j: VId) {
        if i != j {
            self.matrix[i * self.n + j] = true;
            self.matrix[j * self.n + i] = true;
        }
    }

    fn row(&self, i: VId) -> &[bool] {
        &self.matrix[i * self.n..(i + 1) * self.n]
    }
}

impl Graph for AdjMatrix {
    fn order(&self) -> usize {
        self.n
    }

    fn size(&self) -> usize {
        (0..self.n)
            .map(|i| self.row(i)[i + 1..].iter().filter(|&&x| x).count())
            .sum()
    }

    fn vertices(&self) -> Vertices {
        Vertices::new((0..self.n).map(Vertex::new).collect())
    }

    fn edges(&self) -> Edges {
        let mut edges = Vec::new();
        for i in 0..self.n {
            for j in i + 1..self.n {
                if self.get(i, j) {
                    edges.push(Edge::new(i, j));
                }
            }
        }
        Edges::new(edges)
    }

    fn add_edge(&mut self, i: VId, j: VId) -> Result<()> {
        if !self.in_bounds(i) || !self.in_bounds(j) {
            return Err(Err::OutOfBounds(i, j));
        }
        self.set(i, j);
        Ok(())
    }

    fn contains(&self, id: VId) -> bool {
        self.in_bounds(id)
    }

    fn is_adjacent(&self, i: VId, j: VId) -> bool {
        self.in_bounds(i) && self.in_bounds(j) && self.get(i, j)
    }

    fn neighbours(&self, id: VId) -> Result<BTreeSet<VId>> {
        if !self.in_bounds(id) {
            return Err(Err::VertexNotFound(id));
        }
        Ok(self
            .row(id)
            .iter()
            .enumerate()
            .filter(|(_, x)| **x)
            .map(|(j, _)| j)
            .collect())
    }
}

impl std::fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "order: {}, size: {}", self.n, self.size())?;
        for i in 0..self.n {
            for (j, &x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", x as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
