use crate::{graph::Graph, types::VId};
use std::collections::HashMap;

/// The correspondence between vertex ids and their positions in `graph.vertices()`.
///
/// It is valid until the graph is modified.
#[derive(Debug, Clone)]
pub struct IdIndex {
    ids: Vec<VId>,
    indices: HashMap<VId, usize>,
}

impl IdIndex {
    pub fn new<G: Graph + ?Sized>(graph: &G) -> Self {
        let ids: Vec<VId> = graph.vertices().map(|v| v.id()).collect();
        let indices = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self { ids, indices }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index(&self, id: VId) -> Option<usize> {
        self.indices.get(&id).copied()
    }

    pub fn id(&self, index: usize) -> VId {
        self.ids[index]
    }

    pub fn ids(&self) -> &[VId] {
        &self.ids
    }
}
