use crate::stats::OnlineMeanStd;

///////////////////////////////////////////////////////////////////////////////
///
/// VECTOR SPACE
///
/// WTA/WTM reduce a sample accumulator to a prototype by averaging: a
/// (possibly weighted) sum of samples divided by a weight. `VectorSpace`
/// is the minimal contract an engine `Sample` type must satisfy for
/// WTA/WTM to accumulate and average it: a neutral element, pairwise
/// addition, and scaling by a scalar.
pub trait VectorSpace: Clone + Send + Sync {
    fn zero() -> Self;
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, factor: f64) -> Self;
}

///////////////////////////////////////////////////////////////////////////////
///
/// MODEL
///
/// Bundles the handful of callbacks a host needs to supply (distance,
/// prototype accessor, sample extraction, seeding, neighbourhood weight,
/// default edge value) into a single trait passed by reference, rather
/// than plumbing them through as separate closures. One engine user = one
/// `Model` implementation; the driver and the epoch processors are generic
/// over it and never see the individual callbacks.
///
/// - `Item` is whatever the sample iterator actually yields.
/// - `Sample` is what `distance` compares prototypes against.
/// - `V` is the vertex value (prototype + decorations).
/// - `E` is the edge value.
pub trait Model<Item, Sample, V, E>: Sync {
    /// Extracts a sample from one iterator element.
    fn sample_of(&self, item: &Item) -> Sample;

    /// Compares a vertex value's prototype to a sample. Must return a
    /// non-negative, finite value; NaN is a contract violation.
    fn distance(&self, value: &V, sample: &Sample) -> f64;

    /// Produces a fresh vertex value close to (but not identical to) an
    /// existing prototype, for Evolution growth.
    fn clone_prototype(&self, value: &V) -> V;

    /// Produces the vertex value used to seed the graph from the first
    /// sample of an epoch, when the graph starts out empty.
    fn seed_vertex(&self, sample: &Sample) -> V;

    /// Neighbourhood weight `h(d) -> [0, 1]` used by WTM. Contract:
    /// `neighbour_weight(0) == 1.0`.
    fn neighbour_weight(&self, edge_distance: u32) -> f64;

    /// Initial value for an edge newly created by CHL.
    fn default_edge_value(&self) -> E;
}

/// A `Model` built from six plain closures/fn-pointers, for callers who
/// would rather not declare a named type implementing `Model` directly.
pub struct ClosureModel<Item, Sample, V, E> {
    sample_of: Box<dyn Fn(&Item) -> Sample + Sync + Send>,
    distance: Box<dyn Fn(&V, &Sample) -> f64 + Sync + Send>,
    clone_prototype: Box<dyn Fn(&V) -> V + Sync + Send>,
    seed_vertex: Box<dyn Fn(&Sample) -> V + Sync + Send>,
    neighbour_weight: Box<dyn Fn(u32) -> f64 + Sync + Send>,
    default_edge_value: Box<dyn Fn() -> E + Sync + Send>,
}

impl<Item, Sample, V, E> ClosureModel<Item, Sample, V, E> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sample_of: impl Fn(&Item) -> Sample + Sync + Send + 'static,
        distance: impl Fn(&V, &Sample) -> f64 + Sync + Send + 'static,
        clone_prototype: impl Fn(&V) -> V + Sync + Send + 'static,
        seed_vertex: impl Fn(&Sample) -> V + Sync + Send + 'static,
        neighbour_weight: impl Fn(u32) -> f64 + Sync + Send + 'static,
        default_edge_value: impl Fn() -> E + Sync + Send + 'static,
    ) -> Self {
        ClosureModel {
            sample_of: Box::new(sample_of),
            distance: Box::new(distance),
            clone_prototype: Box::new(clone_prototype),
            seed_vertex: Box::new(seed_vertex),
            neighbour_weight: Box::new(neighbour_weight),
            default_edge_value: Box::new(default_edge_value),
        }
    }
}

impl<Item, Sample, V, E> Model<Item, Sample, V, E> for ClosureModel<Item, Sample, V, E> {
    fn sample_of(&self, item: &Item) -> Sample {
        (self.sample_of)(item)
    }

    fn distance(&self, value: &V, sample: &Sample) -> f64 {
        (self.distance)(value, sample)
    }

    fn clone_prototype(&self, value: &V) -> V {
        (self.clone_prototype)(value)
    }

    fn seed_vertex(&self, sample: &Sample) -> V {
        (self.seed_vertex)(sample)
    }

    fn neighbour_weight(&self, edge_distance: u32) -> f64 {
        (self.neighbour_weight)(edge_distance)
    }

    fn default_edge_value(&self) -> E {
        (self.default_edge_value)()
    }
}

///////////////////////////////////////////////////////////////////////////////
///
/// VERTEX DECORATION
///
/// `VertexData` is a structured record with explicit optional fields: a
/// prototype plus three common decorations (tagging, exponential
/// smoothing, running statistics), any of which may be absent, composed
/// directly rather than through chained type parameters.

/// `P` here is always the engine's `Sample` type: the distance function
/// compares a vertex's prototype to a sample directly, and WTA/WTM write the
/// averaged-sample result straight back through this accessor, so the two
/// never diverge in practice. Kept as its own parameter (rather than fixed
/// to `Model::Sample`) so a `VertexData<P>` can be shared across models that
/// disagree on the surrounding `Item`/`Model` types but agree on `P`.
pub trait HasPrototype<P> {
    fn prototype(&mut self) -> &mut P;
}

/// Vertex types that don't carry an online mean/std decoration simply don't
/// implement the non-default branch; `Evolution` treats `None` as "no
/// smoothing available, use the raw per-epoch BMU statistics".
pub trait HasOnlineMeanStd {
    fn online_mean_std(&mut self) -> Option<&mut OnlineMeanStd> {
        None
    }
}

/// A caller-assigned marker, e.g. for colouring vertices during an
/// external traversal or debugging pass. Opaque to the engine itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexTag(pub u64);

/// Exponential smoothing over successive prototype values. Opaque to the
/// engine; a host can call `update` after each epoch if it wants the
/// displayed/consumed prototype to lag the raw WTA/WTM result.
#[derive(Clone, Debug, Default)]
pub struct Smoother<P> {
    pub alpha: f64,
    current: Option<P>,
}

impl<P> Smoother<P> {
    pub fn new(alpha: f64) -> Self {
        Smoother {
            alpha,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&P> {
        self.current.as_ref()
    }

    pub fn update(&mut self, sample: &P, blend: impl Fn(&P, &P, f64) -> P) {
        self.current = Some(match &self.current {
            Some(prev) => blend(prev, sample, self.alpha),
            None => blend(sample, sample, self.alpha),
        });
    }
}

#[derive(Clone, Debug)]
pub struct VertexData<P> {
    pub prototype: P,
    pub tag: Option<VertexTag>,
    pub smoother: Option<Smoother<P>>,
    pub online_mean_std: Option<OnlineMeanStd>,
}

impl<P> VertexData<P> {
    pub fn new(prototype: P) -> Self {
        VertexData {
            prototype,
            tag: None,
            smoother: None,
            online_mean_std: None,
        }
    }

    pub fn with_online_mean_std(mut self) -> Self {
        self.online_mean_std = Some(OnlineMeanStd::new());
        self
    }

    pub fn with_tag(mut self, tag: VertexTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_smoother(mut self, alpha: f64) -> Self {
        self.smoother = Some(Smoother::new(alpha));
        self
    }
}

impl<P> HasPrototype<P> for VertexData<P> {
    fn prototype(&mut self) -> &mut P {
        &mut self.prototype
    }
}

impl<P> HasOnlineMeanStd for VertexData<P> {
    fn online_mean_std(&mut self) -> Option<&mut OnlineMeanStd> {
        self.online_mean_std.as_mut()
    }
}

///////////////////////////////////////////////////////////////////////////////
