//! The graph model.
//!
//! Every analysis in this crate talks to graphs through the [`Graph`](trait.Graph.html)
//! trait only, so a new representation needs nothing but an implementation of it.

pub use adj_list::AdjList;
pub use adj_matrix::AdjMatrix;
pub use error::{Err, Result};

use crate::types::VId;
use derive_more::Display;
use std::collections::BTreeSet;

mod adj_list;
mod adj_matrix;
mod error;

/// A vertex of a graph.
///
/// A vertex is nothing more than its id; all structural queries go through the graph.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(VId);

impl Vertex {
    pub fn new(id: VId) -> Self {
        Vertex(id)
    }

    pub fn id(&self) -> VId {
        self.0
    }
}

/// An undirected edge, stored with the lower id as `source`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}-{}", source, dest)]
pub struct Edge {
    source: VId,
    dest: VId,
}

impl Edge {
    /// Creates the canonical edge between `u` and `v`.
    ///
    /// # Panics
    ///
    /// Panics if `u == v`, simple graphs have no self-loops.
    pub fn new(u: VId, v: VId) -> Self {
        assert_ne!(u, v, "self-loop {}-{}", u, v);
        if u < v {
            Edge { source: u, dest: v }
        } else {
            Edge { source: v, dest: u }
        }
    }

    pub fn source(&self) -> VId {
        self.source
    }

    pub fn dest(&self) -> VId {
        self.dest
    }

    /// Returns the endpoint opposite to `id`, if `id` is an endpoint.
    pub fn other(&self, id: VId) -> Option<VId> {
        if id == self.source {
            Some(self.dest)
        } else if id == self.dest {
            Some(self.source)
        } else {
            None
        }
    }
}

/// An iterator over the vertices of a graph, in increasing id order.
pub struct Vertices {
    vertices: Vec<Vertex>,
    offset: usize,
}

impl Vertices {
    pub(crate) fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            offset: 0,
        }
    }
}

impl Iterator for Vertices {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.vertices.get(self.offset).copied();
        if res.is_some() {
            self.offset += 1;
        }
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.vertices.len() - self.offset;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Vertices {}

/// An iterator over the edges of a graph, in increasing `(source, dest)` order.
pub struct Edges {
    edges: Vec<Edge>,
    offset: usize,
}

impl Edges {
    pub(crate) fn new(edges: Vec<Edge>) -> Self {
        Self { edges, offset: 0 }
    }
}

impl Iterator for Edges {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.edges.get(self.offset).copied();
        if res.is_some() {
            self.offset += 1;
        }
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.edges.len() - self.offset;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Edges {}

/// A simple undirected graph with labelled vertices.
pub trait Graph {
    /// The number of vertices.
    fn order(&self) -> usize;

    /// The number of edges.
    fn size(&self) -> usize {
        self.edges().len()
    }

    fn vertices(&self) -> Vertices;

    /// Every edge exactly once, with the lower id as source.
    fn edges(&self) -> Edges;

    /// Connects `i` and `j`.
    ///
    /// Adding an existing edge changes nothing, and so does `i == j` once both ids are
    /// known to be valid.
    fn add_edge(&mut self, i: VId, j: VId) -> Result<()>;

    fn contains(&self, id: VId) -> bool {
        self.vertices().any(|v| v.id() == id)
    }

    fn is_adjacent(&self, i: VId, j: VId) -> bool {
        i != j && self.edges().any(|e| e == Edge::new(i, j))
    }

    /// The ids adjacent to `id`, or `Err::VertexNotFound` if `id` is not in the graph.
    fn neighbours(&self, id: VId) -> Result<BTreeSet<VId>> {
        if !self.contains(id) {
            return Err(Err::VertexNotFound(id));
        }
        Ok(self.edges().filter_map(|e| e.other(id)).collect())
    }
}
