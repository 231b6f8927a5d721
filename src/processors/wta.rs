use crate::error::GraphResult;
use crate::model::{HasPrototype, Model, VectorSpace};
use crate::processors::{nearest, reduce_over_samples};
use crate::vertex_index::VertexIndex;

///////////////////////////////////////////////////////////////////////////////
///
/// WTA (WINNER-TAKE-ALL)
///
/// For each sample, accumulates it onto its single nearest prototype; after
/// reduction each prototype becomes the mean of whatever it won, and
/// never-won prototypes are left untouched. Used by the driver to
/// seed the very first vertex of an empty graph, and directly reusable by
/// hosts that want a plain batch k-means-style pass.

pub struct Wta;

impl Wta {
    /// Runs one WTA pass over `items`, updating prototypes in place.
    pub fn update_prototypes<Item, Sample, V, E, M>(
        &self,
        index: &VertexIndex<V, E>,
        nb_threads: usize,
        items: &[Item],
        model: &M,
    ) -> GraphResult<()>
    where
        Item: Sync,
        Sample: VectorSpace,
        V: HasPrototype<Sample> + Send + Sync,
        E: Send + Sync,
        M: Model<Item, Sample, V, E>,
    {
        let n = index.len();
        if n == 0 {
            return Ok(());
        }

        let accs = reduce_over_samples(
            items,
            nb_threads,
            n,
            || (Sample::zero(), 0u64),
            |row, item| {
                let sample = model.sample_of(item);
                let w = nearest(index, &sample, model)?;
                row[w].0 = row[w].0.add(&sample);
                row[w].1 += 1;
                Ok(())
            },
            |slot, other| {
                slot.0 = slot.0.add(&other.0);
                slot.1 += other.1;
            },
        )?;

        for (i, (sum, count)) in accs.into_iter().enumerate() {
            if count == 0 {
                continue;
            }
            let mean = sum.scale(1.0 / count as f64);
            index.get(i).with_value_mut(|v| *v.prototype() = mean);
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////
