use super::IdIndex;
use crate::{
    graph::{Err, Graph, Result, Vertex},
    types::VId,
};
use std::collections::{BTreeMap, HashMap};

/// A color for each vertex of a graph.
pub trait Coloring {
    type Color: PartialEq;

    /// The color of vertex `id`, if it has one.
    fn color(&self, id: VId) -> Option<&Self::Color>;
}

impl<C: PartialEq> Coloring for HashMap<VId, C> {
    type Color = C;

    fn color(&self, id: VId) -> Option<&C> {
        self.get(&id)
    }
}

impl<C: PartialEq> Coloring for BTreeMap<VId, C> {
    type Color = C;

    fn color(&self, id: VId) -> Option<&C> {
        self.get(&id)
    }
}

/// Vertex `i` has the color at position `i`.
impl<C: PartialEq> Coloring for [C] {
    type Color = C;

    fn color(&self, id: VId) -> Option<&C> {
        self.get(id)
    }
}

impl<C: PartialEq> Coloring for Vec<C> {
    type Color = C;

    fn color(&self, id: VId) -> Option<&C> {
        self.get(id)
    }
}

/// Decompose a colored graph into maximal connected subsets of vertices of one color.
///
/// Every vertex lands in exactly one subset. Subsets are sorted by id and returned in
/// order of their smallest id. Fails with `Err::Uncoloured` if `colors` misses a vertex.
pub fn connected_monochrome_subsets<G, C>(graph: &G, colors: &C) -> Result<Vec<Vec<Vertex>>>
where
    G: Graph + ?Sized,
    C: Coloring + ?Sized,
{
    let index = IdIndex::new(graph);
    let color_of = move |id: VId| colors.color(id).ok_or(Err::Uncoloured(id));
    let mut visited = vec![false; index.len()];
    let mut res = Vec::new();
    for start in 0..index.len() {
        if visited[start] {
            continue;
        }
        let color = color_of(index.id(start))?;
        let mut subset = Vec::new();
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(i) = stack.pop() {
            let id = index.id(i);
            subset.push(Vertex::new(id));
            for nid in graph.neighbours(id)? {
                let j = match index.index(nid) {
                    Some(j) => j,
                    None => return Err(Err::VertexNotFound(nid)),
                };
                if !visited[j] && color_of(nid)? == color {
                    visited[j] = true;
                    stack.push(j);
                }
            }
        }
        subset.sort();
        res.push(subset);
    }
    Ok(res)
}
