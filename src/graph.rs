///////////////////////////////////////////////////////////////////////////////
///
/// INCLUDES

use std::sync::Arc;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::types::{EdgeRef, VertexRef};
use crate::vertex::Vertex;

///
///////////////////////////////////////////////////////////////////////////////

///////////////////////////////////////////////////////////////////////////////
///
/// GRAPH
///
/// Owns the vertex list and the edge list. Vertices and edges are
/// logically absent as soon as they are killed; traversal is the only place
/// that physically removes them, which is what keeps a callback free to
/// kill things mid-pass without invalidating the traversal itself.

pub struct Graph<V, E> {
    vertices: Vec<VertexRef<V, E>>,
    edges: Vec<EdgeRef<V, E>>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Appends a new vertex with no edges. O(1).
    pub fn add_vertex(&mut self, value: V) -> VertexRef<V, E> {
        let v = Arc::new(Vertex::new(value));
        self.vertices.push(v.clone());
        v
    }

    /// Appends an edge between two live vertices that belong to this graph,
    /// registering weak back-references in both endpoints' adjacency lists.
    /// No uniqueness check: callers wanting "at most one edge per pair"
    /// should consult `find_edge` first.
    pub fn connect(
        &mut self,
        u: &VertexRef<V, E>,
        v: &VertexRef<V, E>,
        data: E,
    ) -> GraphResult<EdgeRef<V, E>> {
        if u.is_killed() || v.is_killed() {
            return Err(GraphError::ForeignVertex);
        }
        if !self.vertices.iter().any(|x| Arc::ptr_eq(x, u))
            || !self.vertices.iter().any(|x| Arc::ptr_eq(x, v))
        {
            return Err(GraphError::ForeignVertex);
        }
        let edge = Arc::new(Edge::new(Arc::downgrade(u), Arc::downgrade(v), data));
        u.push_edge(Arc::downgrade(&edge));
        v.push_edge(Arc::downgrade(&edge));
        self.edges.push(edge.clone());
        Ok(edge)
    }

    /// Scans the smaller of the two adjacency lists; returns the first live
    /// edge linking `u` and `v`. Thread-safe as long as no mutation runs
    /// concurrently.
    pub fn find_edge(&self, u: &VertexRef<V, E>, v: &VertexRef<V, E>) -> Option<EdgeRef<V, E>> {
        let (small, other) = if u.edges().len() <= v.edges().len() {
            (u, v)
        } else {
            (v, u)
        };
        for weak in small.edges().iter() {
            if let Some(edge) = weak.upgrade() {
                if edge.is_killed() {
                    continue;
                }
                if let Some((a, b)) = edge.endpoints() {
                    let links_pair = (Arc::ptr_eq(&a, small) && Arc::ptr_eq(&b, other))
                        || (Arc::ptr_eq(&a, other) && Arc::ptr_eq(&b, small));
                    if links_pair {
                        return Some(edge);
                    }
                }
            }
        }
        None
    }

    /// Single-pass traversal over live vertices. `f` may kill any vertex,
    /// including the one it's called on, but must not add or remove other
    /// vertices/edges. Killed vertices are excised in place, before or
    /// after the callback runs.
    pub fn for_each_vertex(&mut self, mut f: impl FnMut(&VertexRef<V, E>)) {
        let mut i = 0;
        while i < self.vertices.len() {
            if self.vertices[i].is_killed() {
                self.vertices.remove(i);
                continue;
            }
            f(&self.vertices[i]);
            if self.vertices[i].is_killed() {
                self.vertices.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Single-pass traversal over live edges; an edge whose endpoints no
    /// longer resolve to a live, non-killed vertex is pruned as an orphan
    /// (it self-kills inside `extremities`/`endpoints`, see `crate::edge`).
    pub fn for_each_edge(&mut self, mut f: impl FnMut(&EdgeRef<V, E>)) {
        let mut i = 0;
        while i < self.edges.len() {
            let e = &self.edges[i];
            let invalid = e.endpoints().is_none();
            if invalid || e.is_killed() {
                self.edges.remove(i);
                continue;
            }
            f(&self.edges[i].clone());
            let e = &self.edges[i];
            if e.is_killed() || e.endpoints().is_none() {
                self.edges.remove(i);
            } else {
                i += 1;
            }
        }
    }

    pub fn count_vertices(&mut self) -> usize {
        let mut n = 0;
        self.for_each_vertex(|_| n += 1);
        n
    }

    pub fn count_edges(&mut self) -> usize {
        let mut n = 0;
        self.for_each_edge(|_| n += 1);
        n
    }
}

///////////////////////////////////////////////////////////////////////////////
