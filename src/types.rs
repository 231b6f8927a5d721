///////////////////////////////////////////////////////////////////////////////
///
/// INCLUDES

use std::sync::{Arc, Weak};

use crate::edge::Edge;
use crate::vertex::Vertex;

///
///////////////////////////////////////////////////////////////////////////////

///////////////////////////////////////////////////////////////////////////////
///
/// TYPES
///
/// The graph substrate owns vertices and edges strongly (`VertexRef`,
/// `EdgeRef`); adjacency lists and edge endpoints hold only weak references,
/// so an edge never prolongs the life of its endpoints and a vertex's
/// adjacency list never prolongs the life of an edge.

pub type VertexRef<V, E> = Arc<Vertex<V, E>>;
pub type VertexWeak<V, E> = Weak<Vertex<V, E>>;
pub type EdgeRef<V, E> = Arc<Edge<V, E>>;
pub type EdgeWeak<V, E> = Weak<Edge<V, E>>;

/// Placeholder edge-value type for graphs that don't decorate their edges
/// with anything beyond their endpoints (e.g. a bare CHL-induced topology).
#[derive(Clone, Debug, Default)]
pub struct Void;

impl std::fmt::Display for Void {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "_")
    }
}

///////////////////////////////////////////////////////////////////////////////
