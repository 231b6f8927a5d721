use crate::error::GraphResult;
use crate::model::{HasOnlineMeanStd, Model};
use crate::processors::{nearest, reduce_over_samples};
use crate::stats::Welford;
use crate::vertex_index::VertexIndex;

///////////////////////////////////////////////////////////////////////////////
///
/// BMU STATISTICS
///
/// For each sample, accumulates the BMU's distortion into a per-vertex
/// Welford triple. The reduced `(count, mean, variance)` is both
/// returned (for `Evolution` to consult) and folded into each vertex's
/// `online_mean_std` decoration, when it carries one.

pub struct BmuStats;

/// One vertex's reduced BMU statistics for the epoch just processed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BmuRecord {
    pub count: u64,
    pub mean: f64,
    pub variance: f64,
}

impl BmuStats {
    /// Runs one BMU pass, returning one record per vertex in index order.
    pub fn run<Item, Sample, V, E, M>(
        &self,
        index: &VertexIndex<V, E>,
        nb_threads: usize,
        items: &[Item],
        model: &M,
    ) -> GraphResult<Vec<BmuRecord>>
    where
        Item: Sync,
        V: HasOnlineMeanStd + Send + Sync,
        E: Send + Sync,
        M: Model<Item, Sample, V, E>,
    {
        let n = index.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let accs = reduce_over_samples(
            items,
            nb_threads,
            n,
            Welford::new,
            |row, item| {
                let sample = model.sample_of(item);
                let w = nearest(index, &sample, model)?;
                let d = index.get(w).with_value(|v| model.distance(v, &sample));
                row[w].update(d);
                Ok(())
            },
            |slot, other| *slot = slot.merge(*other),
        )?;

        let mut records = Vec::with_capacity(n);
        for (i, welford) in accs.into_iter().enumerate() {
            let record = BmuRecord {
                count: welford.count(),
                mean: welford.mean(),
                variance: welford.variance(),
            };
            if record.count > 0 {
                index.get(i).with_value_mut(|v| {
                    if let Some(oms) = v.online_mean_std() {
                        oms.observe(record.mean);
                    }
                });
            }
            records.push(record);
        }
        Ok(records)
    }
}

///////////////////////////////////////////////////////////////////////////////
