use std::collections::VecDeque;
use std::sync::Arc;

use crate::types::VertexRef;

/// Given a source vertex, enumerates `(vertex, edge_distance)` pairs
/// reachable within a caller-supplied maximum distance, via breadth-first
/// expansion over the current (possibly stale) adjacency lists.
///
/// The expansion is memoryless across calls: nothing here is cached, so
/// every WTM pass rediscovers its neighbourhoods from the graph as it
/// stands right now. Killed vertices and invalid edges are treated as
/// absent; ties at the same distance come out in adjacency-list order,
/// which callers must not rely on (weights depend only on distance).
pub fn neighbourhood<V, E>(
    source: &VertexRef<V, E>,
    max_distance: u32,
    mut should_expand: impl FnMut(u32) -> bool,
) -> Vec<(VertexRef<V, E>, u32)> {
    let mut visited: Vec<*const ()> = vec![Arc::as_ptr(source) as *const ()];
    let mut frontier = VecDeque::new();
    frontier.push_back((source.clone(), 0u32));

    let mut out = Vec::new();
    out.push((source.clone(), 0u32));

    while let Some((v, d)) = frontier.pop_front() {
        if d >= max_distance || !should_expand(d) {
            continue;
        }
        for weak in v.edges().iter() {
            let edge = match weak.upgrade() {
                Some(e) if !e.is_killed() => e,
                _ => continue,
            };
            let neighbour = match edge.other(&v) {
                Some(n) if !n.is_killed() => n,
                _ => continue,
            };
            let ptr = Arc::as_ptr(&neighbour) as *const ();
            if visited.contains(&ptr) {
                continue;
            }
            visited.push(ptr);
            let nd = d + 1;
            out.push((neighbour.clone(), nd));
            frontier.push_back((neighbour, nd));
        }
    }

    out
}
