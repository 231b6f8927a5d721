///////////////////////////////////////////////////////////////////////////////
///
/// INCLUDES

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::types::{VertexRef, VertexWeak};

///
///////////////////////////////////////////////////////////////////////////////

///////////////////////////////////////////////////////////////////////////////
///
/// EDGE
///
/// Internal edge struct. Only accessible through the `Graph` object that
/// created it. Holds two weak references to its endpoints so that an edge
/// never keeps a vertex alive; an edge whose endpoint reference can no
/// longer be resolved to a live, non-killed vertex is "invalid" and
/// self-kills the moment it is inspected.

pub struct Edge<V, E> {
    v1: VertexWeak<V, E>,
    v2: VertexWeak<V, E>,
    data: Mutex<E>,
    killed: AtomicBool,
}

unsafe impl<V: Send, E: Send> Sync for Edge<V, E> {}

impl<V, E> Edge<V, E> {
    pub(crate) fn new(v1: VertexWeak<V, E>, v2: VertexWeak<V, E>, data: E) -> Self {
        Edge {
            v1,
            v2,
            data: Mutex::new(data),
            killed: AtomicBool::new(false),
        }
    }

    pub fn kill(&self) {
        self.killed.store(true, Ordering::Relaxed);
    }

    pub fn is_killed(&self) -> bool {
        self.killed.load(Ordering::Relaxed)
    }

    /// Resolves both endpoints. Returns `None` for a side whose target has
    /// been killed or dropped; an edge with either side `None` is invalid
    /// and kills itself as a side effect.
    pub(crate) fn extremities(&self) -> (Option<VertexRef<V, E>>, Option<VertexRef<V, E>>) {
        let a = self.v1.upgrade().filter(|v| !v.is_killed());
        let b = self.v2.upgrade().filter(|v| !v.is_killed());
        if a.is_none() || b.is_none() {
            self.kill();
        }
        (a, b)
    }

    /// Both endpoints, only if the edge is still valid. This is the call
    /// most processors and traversal helpers want.
    pub fn endpoints(&self) -> Option<(VertexRef<V, E>, VertexRef<V, E>)> {
        match self.extremities() {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// The endpoint of this edge that is not `from`, if the edge is valid
    /// and `from` is actually one of its two endpoints.
    pub fn other(&self, from: &VertexRef<V, E>) -> Option<VertexRef<V, E>> {
        let (a, b) = self.endpoints()?;
        if std::sync::Arc::ptr_eq(&a, from) {
            Some(b)
        } else if std::sync::Arc::ptr_eq(&b, from) {
            Some(a)
        } else {
            None
        }
    }

    pub fn with_value<R>(&self, f: impl FnOnce(&E) -> R) -> R {
        f(&self.data.lock().unwrap())
    }

    pub fn read(&self) -> E
    where
        E: Clone,
    {
        self.data.lock().unwrap().clone()
    }

    pub fn write(&self, value: E) {
        *self.data.lock().unwrap() = value;
    }
}

///////////////////////////////////////////////////////////////////////////////
