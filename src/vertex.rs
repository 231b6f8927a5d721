///////////////////////////////////////////////////////////////////////////////
///
/// INCLUDES

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::types::EdgeWeak;

///
///////////////////////////////////////////////////////////////////////////////

///////////////////////////////////////////////////////////////////////////////
///
/// VERTEX
///
/// Internal vertex record. Only ever reachable through a `Graph`, or through
/// a `VertexRef` handed out by one. Carries a user-defined value (the
/// prototype plus whatever decorations the caller composes, see
/// `crate::model::VertexData`), a kill flag, and a superset of the edges
/// incident to it (pruned lazily on traversal).

pub struct Vertex<V, E> {
    data: Mutex<V>,
    edges: Mutex<Vec<EdgeWeak<V, E>>>,
    killed: AtomicBool,
    /// Position assigned by the last `VertexIndex::rebuild`. Only meaningful
    /// between two rebuilds; processors read it to address accumulator
    /// slots by integer position.
    index: Cell<usize>,
}

unsafe impl<V: Send, E: Send> Sync for Vertex<V, E> {}

impl<V, E> Vertex<V, E> {
    pub(crate) fn new(data: V) -> Self {
        Vertex {
            data: Mutex::new(data),
            edges: Mutex::new(Vec::new()),
            killed: AtomicBool::new(false),
            index: Cell::new(usize::MAX),
        }
    }

    /// Marks this vertex for deletion. Idempotent. The vertex is logically
    /// absent immediately; physical removal from the graph's vertex list
    /// happens on the next traversal.
    pub fn kill(&self) {
        self.killed.store(true, Ordering::Relaxed);
    }

    pub fn is_killed(&self) -> bool {
        self.killed.load(Ordering::Relaxed)
    }

    /// Runs `f` against the current value, returning its result. Prefer this
    /// or `read`/`write` over manual locking: the engine never holds the
    /// lock across a traversal callback.
    pub fn with_value<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.data.lock().unwrap())
    }

    pub fn with_value_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.data.lock().unwrap())
    }

    pub fn read(&self) -> V
    where
        V: Clone,
    {
        self.data.lock().unwrap().clone()
    }

    pub fn write(&self, value: V) {
        *self.data.lock().unwrap() = value;
    }

    pub(crate) fn push_edge(&self, edge: EdgeWeak<V, E>) {
        self.edges.lock().unwrap().push(edge);
    }

    /// Adjacency list, superset of true incident edges (converges to the
    /// true set as stale weak references are pruned on traversal).
    pub(crate) fn edges(&self) -> std::sync::MutexGuard<'_, Vec<EdgeWeak<V, E>>> {
        self.edges.lock().unwrap()
    }

    pub(crate) fn set_index(&self, i: usize) {
        self.index.set(i);
    }

    /// The position assigned by the most recent `VertexIndex::rebuild`.
    /// Only valid until the next rebuild.
    pub fn index(&self) -> usize {
        self.index.get()
    }
}

///////////////////////////////////////////////////////////////////////////////
