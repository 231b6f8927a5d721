use crate::config::GngTConfig;
use crate::error::{GraphError, GraphResult};
use crate::evolution::Evolution;
use crate::graph::Graph;
use crate::model::{HasOnlineMeanStd, HasPrototype, Model, VectorSpace};
use crate::processors::{BmuStats, Chl, Wta, Wtm};
use crate::vertex_index::VertexIndex;

///////////////////////////////////////////////////////////////////////////////
///
/// GNG-T DRIVER
///
/// Composes the graph substrate, the vertex index, and the four epoch
/// processors into one epoch schedule: WTM×n_before, BMU, Evolution,
/// (CHL, WTM)×n_after, recomputing topology whenever the vertex or edge
/// set changes. One `Processor` owns the long-lived `VertexIndex` across
/// epochs; the graph, config, sample model and evolution policy are all
/// passed in per call rather than stored, so a host can swap any of them
/// between epochs without rebuilding the processor.

pub struct Processor<V, E> {
    index: VertexIndex<V, E>,
    wta: Wta,
    wtm: Wtm,
    bmu: BmuStats,
    chl: Chl,
}

impl<V, E> Default for Processor<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Processor<V, E> {
    pub fn new() -> Self {
        Processor {
            index: VertexIndex::new(),
            wta: Wta,
            wtm: Wtm,
            bmu: BmuStats,
            chl: Chl,
        }
    }

    /// Constructs a processor with its vertex index already built from
    /// `graph`'s current vertex set.
    pub fn with_graph(graph: &mut Graph<V, E>) -> Self {
        let mut p = Self::new();
        p.update_topology(graph);
        p
    }

    pub fn index(&self) -> &VertexIndex<V, E> {
        &self.index
    }

    /// Rebuilds the vertex index from the graph's current live vertex set.
    /// Callers embedding the processors directly rather than through
    /// `epoch` must call this after any vertex/edge mutation and before
    /// the next pass reads `self.index()`.
    pub fn update_topology(&mut self, graph: &mut Graph<V, E>) {
        self.index.rebuild(graph);
    }

    /// Runs one full epoch over `items`. Returns a `GraphError` only for
    /// contract violations (`nb_wtm_before == 0`, a bad
    /// `neighbour_weight(0)`, `distance()` returning a non-finite or
    /// negative value); degenerate inputs (an empty sample range, an empty
    /// graph) are handled in place and never surface as an error.
    pub fn epoch<Item, Sample, M, Ev>(
        &mut self,
        graph: &mut Graph<V, E>,
        config: &GngTConfig,
        items: &[Item],
        model: &M,
        evolution: &Ev,
    ) -> GraphResult<()>
    where
        Item: Sync,
        Sample: VectorSpace,
        V: HasPrototype<Sample> + HasOnlineMeanStd + Send + Sync,
        E: Send + Sync,
        M: Model<Item, Sample, V, E>,
        Ev: Evolution<Item, Sample, V, E, M>,
    {
        if config.nb_wtm_before == 0 {
            return Err(GraphError::ZeroWtmBeforePasses);
        }
        let weight_at_zero = model.neighbour_weight(0);
        if (weight_at_zero - 1.0).abs() > 1e-9 {
            return Err(GraphError::BadNeighbourWeightAtZero(weight_at_zero));
        }

        log::debug!("epoch: starting, {} samples", items.len());

        if items.is_empty() {
            graph.for_each_vertex(|v| v.kill());
            self.update_topology(graph);
            log::debug!("epoch: empty sample range, all vertices killed");
            return Ok(());
        }

        self.run_wtm(config, items, model)?;
        let n = self.index.len();

        if n == 0 {
            let first_sample = model.sample_of(&items[0]);
            let seed = model.seed_vertex(&first_sample);
            graph.add_vertex(seed);
            self.update_topology(graph);
            self.wta
                .update_prototypes(&self.index, config.nb_threads, items, model)?;
            log::debug!("epoch: seeded first vertex from an empty graph");
            return Ok(());
        }

        for _ in 1..config.nb_wtm_before {
            self.run_wtm(config, items, model)?;
        }

        self.update_topology(graph);
        let bmu_records = self.bmu.run(&self.index, config.nb_threads, items, model)?;

        evolution.evolve(graph, &self.index, &bmu_records, model);
        self.update_topology(graph);

        for _ in 0..config.nb_wtmchl_after {
            self.chl
                .update_edges(graph, &self.index, config.nb_threads, items, model)?;
            self.update_topology(graph);
            self.run_wtm(config, items, model)?;
        }

        log::debug!(
            "epoch: done, {} vertices, {} edges",
            self.index.len(),
            graph.count_edges()
        );
        Ok(())
    }

    fn run_wtm<Item, Sample, M>(
        &self,
        config: &GngTConfig,
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
        self.wtm.update_prototypes(
            &self.index,
            config.nb_threads,
            items,
            model,
            config.max_edge_distance,
            config.weight_epsilon,
        )
    }
}

///////////////////////////////////////////////////////////////////////////////
