use crate::error::GraphResult;
use crate::model::{HasPrototype, Model, VectorSpace};
use crate::processors::{nearest, reduce_over_samples, vertex_at};
use crate::topology::neighbourhood;
use crate::vertex_index::VertexIndex;

///////////////////////////////////////////////////////////////////////////////
///
/// WTM (WINNER-TAKE-MOST, SOM-LIKE)
///
/// For each sample, finds the BMU and weights every vertex within the
/// caller's edge-distance cutoff by `neighbour_weight(d)`, accumulating a
/// weighted sum and weight total per vertex. Reduction divides
/// through, so a single-vertex graph degenerates to plain WTA (Scenario A).

pub struct Wtm;

impl Wtm {
    /// Runs one WTM pass over `items`, updating prototypes in place.
    ///
    /// `max_distance` and `weight_epsilon` bound the topology-oracle query:
    /// neighbours past `max_distance` edges, or whose weight falls below
    /// `weight_epsilon`, are not visited.
    #[allow(clippy::too_many_arguments)]
    pub fn update_prototypes<Item, Sample, V, E, M>(
        &self,
        index: &VertexIndex<V, E>,
        nb_threads: usize,
        items: &[Item],
        model: &M,
        max_distance: u32,
        weight_epsilon: f64,
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
            || (Sample::zero(), 0.0f64),
            |row, item| {
                let sample = model.sample_of(item);
                let w = nearest(index, &sample, model)?;
                let source = vertex_at(index, w);
                let frontier = neighbourhood(source, max_distance, |d| {
                    model.neighbour_weight(d + 1) >= weight_epsilon
                });
                for (v, d) in frontier {
                    let h = if d == 0 { 1.0 } else { model.neighbour_weight(d) };
                    if h < weight_epsilon {
                        continue;
                    }
                    let i = v.index();
                    row[i].0 = row[i].0.add(&sample.scale(h));
                    row[i].1 += h;
                }
                Ok(())
            },
            |slot, other| {
                slot.0 = slot.0.add(&other.0);
                slot.1 += other.1;
            },
        )?;

        for (i, (sum, weight)) in accs.into_iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            let mean = sum.scale(1.0 / weight);
            index.get(i).with_value_mut(|v| *v.prototype() = mean);
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////
