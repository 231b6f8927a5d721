use crate::graph::Graph;
use crate::types::VertexRef;

/// A contiguous snapshot of the live vertices, refreshed on demand by
/// `rebuild` (this is the engine's `update_topology`). Numerical
/// passes address a vertex by its integer position in this index and map
/// back to the `VertexRef` when they need to touch the graph.
///
/// Consumers treat an index as immutable for the duration of one epoch
/// processor pass; it must not be mutated while workers are reading it.
pub struct VertexIndex<V, E> {
    order: Vec<VertexRef<V, E>>,
}

impl<V, E> Default for VertexIndex<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> VertexIndex<V, E> {
    pub fn new() -> Self {
        VertexIndex { order: Vec::new() }
    }

    /// Rebuilds the index from the graph's current live vertex set,
    /// pruning killed/orphaned elements along the way (it is itself a
    /// traversal). Every live vertex's `index()` is updated to match its
    /// new position.
    pub fn rebuild(&mut self, graph: &mut Graph<V, E>) {
        self.order.clear();
        graph.for_each_vertex(|v| self.order.push(v.clone()));
        for (i, v) in self.order.iter().enumerate() {
            v.set_index(i);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, i: usize) -> &VertexRef<V, E> {
        &self.order[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexRef<V, E>> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[VertexRef<V, E>] {
        &self.order
    }
}
