use ahash::AHashSet;
use rayon::prelude::*;

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::model::Model;
use crate::processors::two_nearest;
use crate::vertex_index::VertexIndex;

///////////////////////////////////////////////////////////////////////////////
///
/// CHL (COMPETITIVE HEBBIAN LEARNING)
///
/// For each sample, emits an edge request between its two nearest
/// prototypes. Unlike WTA/WTM/BMU this accumulator is sparse, not
/// per-vertex: rather than a `[K threads x N vertices]` buffer, each
/// worker builds a per-thread hash set of edge-request pairs and the
/// results are reduced by union, so this processor does not go through
/// `reduce_over_samples`.

pub struct Chl;

impl Chl {
    /// Runs one CHL pass, creating or refreshing an edge for every unique
    /// `(w1, w2)` request the sample set induces. Never connects a vertex
    /// to itself, and never deletes an edge: aging and pruning stale
    /// edges is left to whatever decoration the caller puts on `E`. A
    /// `connect` failure (a request naming a vertex foreign to `graph`,
    /// which should not occur since both endpoints come from `graph`'s own
    /// index) propagates rather than silently dropping the requested edge.
    pub fn update_edges<Item, Sample, V, E, M>(
        &self,
        graph: &mut Graph<V, E>,
        index: &VertexIndex<V, E>,
        nb_threads: usize,
        items: &[Item],
        model: &M,
    ) -> GraphResult<()>
    where
        Item: Sync,
        V: Send + Sync,
        E: Send + Sync,
        M: Model<Item, Sample, V, E>,
    {
        let requests = self.reduce_requests(index, nb_threads, items, model)?;
        for (a, b) in requests {
            let va = index.get(a);
            let vb = index.get(b);
            match graph.find_edge(va, vb) {
                Some(edge) => edge.write(model.default_edge_value()),
                None => {
                    graph.connect(va, vb, model.default_edge_value())?;
                }
            }
        }
        Ok(())
    }

    fn reduce_requests<Item, Sample, V, E, M>(
        &self,
        index: &VertexIndex<V, E>,
        nb_threads: usize,
        items: &[Item],
        model: &M,
    ) -> GraphResult<AHashSet<(usize, usize)>>
    where
        Item: Sync,
        V: Send + Sync,
        E: Send + Sync,
        M: Model<Item, Sample, V, E>,
    {
        if items.is_empty() || index.len() < 2 {
            return Ok(AHashSet::new());
        }

        let k = nb_threads.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(k)
            .build()
            .expect("failed to build epoch-processor thread pool");
        let chunk_len = (items.len() + k - 1) / k;

        let partials: GraphResult<Vec<AHashSet<(usize, usize)>>> = pool.install(|| {
            items
                .par_chunks(chunk_len.max(1))
                .map(|chunk| -> GraphResult<AHashSet<(usize, usize)>> {
                    let mut requests = AHashSet::default();
                    for item in chunk {
                        let sample = model.sample_of(item);
                        let (a, b) = two_nearest(index, &sample, model)?;
                        if a == b {
                            continue;
                        }
                        requests.insert(if a < b { (a, b) } else { (b, a) });
                    }
                    Ok(requests)
                })
                .collect()
        });
        let partials = partials?;

        let mut merged = AHashSet::default();
        for partial in partials {
            merged.extend(partial);
        }
        Ok(merged)
    }
}

///////////////////////////////////////////////////////////////////////////////
