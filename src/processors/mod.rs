mod bmu;
mod chl;
mod wta;
mod wtm;

pub use bmu::{BmuRecord, BmuStats};
pub use chl::Chl;
pub use wta::Wta;
pub use wtm::Wtm;

use rayon::prelude::*;

use crate::error::{GraphError, GraphResult};
use crate::model::Model;
use crate::types::VertexRef;
use crate::vertex_index::VertexIndex;

///////////////////////////////////////////////////////////////////////////////
///
/// SHARED PARTITION/REDUCE SKELETON
///
/// All four epoch processors (WTA, WTM, BMU, CHL) share this shape:
/// snapshot the vertex index, split the sample range into `nb_threads`
/// chunks, let each worker accumulate privately, then reduce position-wise.
/// `Acc` is the per-vertex accumulator type; `make_acc`/`process`/`merge`
/// are the only operator-specific pieces.

pub(crate) fn reduce_over_samples<S, Acc>(
    samples: &[S],
    nb_threads: usize,
    n_vertices: usize,
    make_acc: impl Fn() -> Acc + Sync,
    process_sample: impl Fn(&mut [Acc], &S) -> GraphResult<()> + Sync,
    merge: impl Fn(&mut Acc, Acc) + Sync,
) -> GraphResult<Vec<Acc>>
where
    Acc: Send,
{
    let make_row = || (0..n_vertices).map(|_| make_acc()).collect::<Vec<Acc>>();

    if samples.is_empty() {
        return Ok(make_row());
    }

    let k = nb_threads.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(k)
        .build()
        .expect("failed to build epoch-processor thread pool");
    let chunk_len = (samples.len() + k - 1) / k;

    let partials: GraphResult<Vec<Vec<Acc>>> = pool.install(|| {
        samples
            .par_chunks(chunk_len.max(1))
            .map(|chunk| -> GraphResult<Vec<Acc>> {
                let mut row = make_row();
                for s in chunk {
                    process_sample(&mut row, s)?;
                }
                Ok(row)
            })
            .collect()
    });
    let partials = partials?;

    let mut iter = partials.into_iter();
    let mut result = iter.next().unwrap_or_else(make_row);
    for partial in iter {
        for (slot, other) in result.iter_mut().zip(partial) {
            merge(slot, other);
        }
    }
    Ok(result)
}

/// Linear nearest-prototype search over the vertex index. Ties are broken
/// by lowest index. `distance()` returning a negative or non-finite value
/// is a contract violation, checked unconditionally (not just in debug
/// builds): a bad distance would otherwise silently corrupt `best_d` and
/// every accumulator downstream of it.
pub(crate) fn nearest<Sample, V, E, M, Item>(
    index: &VertexIndex<V, E>,
    sample: &Sample,
    model: &M,
) -> GraphResult<usize>
where
    M: Model<Item, Sample, V, E>,
{
    let mut best = 0usize;
    let mut best_d = f64::INFINITY;
    for i in 0..index.len() {
        let d = index.get(i).with_value(|v| model.distance(v, sample));
        if !d.is_finite() || d < 0.0 {
            return Err(GraphError::NonFiniteDistance);
        }
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    Ok(best)
}

/// Linear search for the two nearest prototypes, ties broken by lowest
/// index. When the index has fewer than two vertices, both results point
/// at the same (only) vertex; callers must special-case that before
/// using it as a CHL edge request (an edge cannot connect a vertex to
/// itself).
pub(crate) fn two_nearest<Sample, V, E, M, Item>(
    index: &VertexIndex<V, E>,
    sample: &Sample,
    model: &M,
) -> GraphResult<(usize, usize)>
where
    M: Model<Item, Sample, V, E>,
{
    let mut best1 = 0usize;
    let mut d1 = f64::INFINITY;
    let mut best2 = 0usize;
    let mut d2 = f64::INFINITY;
    for i in 0..index.len() {
        let d = index.get(i).with_value(|v| model.distance(v, sample));
        if !d.is_finite() || d < 0.0 {
            return Err(GraphError::NonFiniteDistance);
        }
        if d < d1 {
            d2 = d1;
            best2 = best1;
            d1 = d;
            best1 = i;
        } else if d < d2 {
            d2 = d;
            best2 = i;
        }
    }
    Ok((best1, best2))
}

pub(crate) fn vertex_at<V, E>(index: &VertexIndex<V, E>, i: usize) -> &VertexRef<V, E> {
    index.get(i)
}

///////////////////////////////////////////////////////////////////////////////
