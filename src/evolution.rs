use crate::graph::Graph;
use crate::model::{HasOnlineMeanStd, Model};
use crate::processors::BmuRecord;
use crate::stats::Welford;
use crate::vertex_index::VertexIndex;

///////////////////////////////////////////////////////////////////////////////
///
/// EVOLUTION
///
/// The decision step that adds or removes vertices based on local
/// distortion vs. target. `Evolution` is a trait, not a concrete step
/// baked into the driver, so hosts can swap in their own growth policy;
/// `DefaultEvolution` implements a confidence-interval policy: a vertex
/// whose distortion confidence interval sits entirely above the target
/// gets cloned, one entirely below it gets killed.
pub trait Evolution<Item, Sample, V, E, M>
where
    M: Model<Item, Sample, V, E>,
    V: HasOnlineMeanStd,
{
    /// `index` and `records` are parallel: `records[i]` is the BMU
    /// statistics for `index.get(i)`. May add vertices to `graph` (via
    /// `model.clone_prototype`) and/or kill existing ones; must not touch
    /// edges (CHL is solely responsible for those).
    fn evolve(
        &self,
        graph: &mut Graph<V, E>,
        index: &VertexIndex<V, E>,
        records: &[BmuRecord],
        model: &M,
    );
}

/// The confidence-interval growth policy.
///
/// Two boundary values are given an explicit, principled meaning beyond
/// the raw inequality: `target_distortion == 0.0` disables cloning
/// outright (an unreachable zero-distortion target cannot by itself
/// justify unbounded growth), and `target_distortion.is_infinite()`
/// disables killing outright (an infinite tolerance cannot make any
/// finite distortion "too good"). Without these, the raw inequalities
/// `NT < m - r` / `m + r < NT` degenerate at these two limits into
/// always-false / always-true regardless of the actual data, which is
/// not the intended behaviour.
pub struct DefaultEvolution {
    pub sigma_coef: f64,
    pub target_distortion: f64,
}

impl DefaultEvolution {
    pub fn new(sigma_coef: f64, target_distortion: f64) -> Self {
        DefaultEvolution {
            sigma_coef,
            target_distortion,
        }
    }

    pub fn from_config(config: &crate::config::GngTConfig) -> Self {
        DefaultEvolution::new(config.sigma_coef, config.target_distortion())
    }
}

impl<Item, Sample, V, E, M> Evolution<Item, Sample, V, E, M> for DefaultEvolution
where
    M: Model<Item, Sample, V, E>,
    V: HasOnlineMeanStd,
{
    fn evolve(
        &self,
        graph: &mut Graph<V, E>,
        index: &VertexIndex<V, E>,
        records: &[BmuRecord],
        model: &M,
    ) {
        let mut spread = Welford::new();
        for record in records {
            if record.count != 0 {
                spread.update(record.mean);
            }
        }
        let spatial = spread.std() * self.sigma_coef;
        let nt = self.target_distortion;

        let mut to_clone = Vec::new();
        let mut to_kill = Vec::new();

        for (i, record) in records.iter().enumerate() {
            let v = index.get(i);
            if record.count == 0 {
                v.kill();
                continue;
            }
            // Prefer the vertex's own longitudinal online_mean_std decoration,
            // when it carries one and it's already seen an observation: it
            // low-pass-filters successive epochs' BMU statistics, smoothing
            // the noisy single-epoch record this pass just produced. A vertex
            // without the decoration (or seeing its first epoch) falls back
            // to the raw per-pass record.
            let (mean, std) = v.with_value_mut(|val| match val.online_mean_std() {
                Some(oms) if oms.is_valid() => (oms.mean(), oms.std()),
                _ => (record.mean, record.variance.max(0.0).sqrt()),
            });
            let radius = self.sigma_coef * std + spatial;
            if nt > 0.0 && nt < mean - radius {
                to_clone.push(v.clone());
            } else if nt.is_finite() && mean + radius < nt {
                to_kill.push(v.clone());
            }
        }

        for v in &to_clone {
            let value = v.with_value(|val| model.clone_prototype(val));
            graph.add_vertex(value);
            log::info!("evolution: cloned a vertex, local distortion above target");
        }
        for v in &to_kill {
            v.kill();
            log::info!("evolution: killed a vertex, local distortion below target");
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
