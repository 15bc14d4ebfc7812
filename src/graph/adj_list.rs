use super::{Edge, Edges, Err, Graph, Result, Vertex, Vertices};
use crate::types::VId;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound::{Excluded, Unbounded};

/// A sparse graph with arbitrary vertex ids.
///
/// Unlike [`AdjMatrix`](struct.AdjMatrix.html), ids need not be contiguous, so every
/// vertex has to be added with [`add_vertex`](#method.add_vertex) before it takes part
/// in an edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjList {
    vertices: BTreeMap<VId, BTreeSet<VId>>,
}

impl AdjList {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Add a vertex; adding an existing vertex changes nothing.
    pub fn add_vertex(&mut self, vid: VId) {
        self.vertices.entry(vid).or_insert_with(BTreeSet::new);
    }

    pub fn degree(&self, vid: VId) -> Option<usize> {
        self.vertices.get(&vid).map(|neighbours| neighbours.len())
    }
}

impl Graph for AdjList {
    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.vertices.values().map(|n| n.len()).sum::<usize>() / 2
    }

    fn vertices(&self) -> Vertices {
        Vertices::new(self.vertices.keys().map(|&vid| Vertex::new(vid)).collect())
    }

    fn edges(&self) -> Edges {
        let mut edges = Vec::new();
        for (&vid, neighbours) in &self.vertices {
            for &nid in neighbours.range((Excluded(vid), Unbounded)) {
                edges.push(Edge::new(vid, nid));
            }
        }
        Edges::new(edges)
    }

    fn add_edge(&mut self, i: VId, j: VId) -> Result<()> {
        if !self.contains(i) || !self.contains(j) {
            return Err(Err::OutOfBounds(i, j));
        }
        if i != j {
            self.vertices.entry(i).or_default().insert(j);
            self.vertices.entry(j).or_default().insert(i);
        }
        Ok(())
    }

    fn contains(&self, id: VId) -> bool {
        self.vertices.contains_key(&id)
    }

    fn is_adjacent(&self, i: VId, j: VId) -> bool {
        self.vertices
            .get(&i)
            .map_or(false, |neighbours| neighbours.contains(&j))
    }

    fn neighbours(&self, id: VId) -> Result<BTreeSet<VId>> {
        self.vertices
            .get(&id)
            .cloned()
            .ok_or(Err::VertexNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_star() -> AdjList {
        let mut g = AdjList::new();
        for vid in vec![7, 3, 42, 11] {
            g.add_vertex(vid);
        }
        for (u, v) in vec![(7, 3), (7, 42), (11, 7)] {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn test_star() {
        let g = create_star();
        assert_eq!(g.order(), 4);
        assert_eq!(g.size(), 3);
        assert_eq!(
            g.vertices().map(|v| v.id()).collect::<Vec<_>>(),
            vec![3, 7, 11, 42]
        );
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![Edge::new(3, 7), Edge::new(7, 11), Edge::new(7, 42)]
        );
        assert_eq!(g.degree(7), Some(3));
        assert_eq!(g.degree(8), None);
    }

    #[test]
    fn test_add_edge() {
        let mut g = create_star();
        assert_eq!(g.add_edge(3, 5), Err(Err::OutOfBounds(3, 5)));
        assert_eq!(g.add_edge(42, 7), Ok(()));
        assert_eq!(g.add_edge(42, 42), Ok(()));
        assert_eq!(g.size(), 3);
        assert_eq!(g.is_adjacent(42, 42), false);
        g.add_vertex(7);
        assert_eq!(g.degree(7), Some(3));
    }

    #[test]
    fn test_neighbours() {
        let g = create_star();
        assert_eq!(
            g.neighbours(7).unwrap().into_iter().collect::<Vec<_>>(),
            vec![3, 11, 42]
        );
        assert_eq!(g.neighbours(1), Err(Err::VertexNotFound(1)));
    }
}
