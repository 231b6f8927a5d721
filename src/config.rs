use serde::{Deserialize, Serialize};

///////////////////////////////////////////////////////////////////////////////
///
/// CONFIGURATION
///
/// Plain `Clone + Debug` data with a fluent, consuming-`self` builder, and
/// `serde` derives so a host can load a config from a file. This is
/// config-loading convenience, not graph persistence.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GngTConfig {
    /// Target density parameter: samples per prototype volume.
    pub t: f64,
    /// Scale factor; `target_distortion() == density * t`.
    pub density: f64,
    /// Confidence multiplier on standard deviations in Evolution.
    pub sigma_coef: f64,
    /// WTM weight at edge-distance 1 and beyond (uniform past distance 0,
    /// which is always weight 1). A constant neighbour weight flattens
    /// the SOM neighbourhood instead of decaying with distance; callers
    /// wanting Gaussian-like decay should not use this scalar form and
    /// should implement `Model::neighbour_weight` directly instead.
    pub neighbour_weight: f64,
    /// Number of WTM passes run before Evolution. Must be >= 1.
    pub nb_wtm_before: u32,
    /// Number of (CHL, WTM) pass pairs run after Evolution.
    pub nb_wtmchl_after: u32,
    /// Worker threads per epoch-processor pass.
    pub nb_threads: usize,
    /// Maximum edge-distance the topology oracle expands to for WTM.
    pub max_edge_distance: u32,
    /// WTM neighbour-weight cutoff; weights below this are not accumulated.
    pub weight_epsilon: f64,
}

impl GngTConfig {
    pub fn builder() -> GngTConfigBuilder {
        GngTConfigBuilder::default()
    }

    /// The target mean distortion Evolution clones/kills vertices against.
    pub fn target_distortion(&self) -> f64 {
        self.density * self.t
    }
}

impl Default for GngTConfig {
    fn default() -> Self {
        GngTConfig {
            t: 0.0,
            density: 1.0,
            sigma_coef: 1.5,
            neighbour_weight: 0.1,
            nb_wtm_before: 1,
            nb_wtmchl_after: 0,
            nb_threads: 1,
            max_edge_distance: 1,
            weight_epsilon: 1e-3,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GngTConfigBuilder {
    inner: GngTConfig,
}

impl GngTConfigBuilder {
    pub fn t(mut self, t: f64) -> Self {
        self.inner.t = t;
        self
    }

    pub fn density(mut self, density: f64) -> Self {
        self.inner.density = density;
        self
    }

    pub fn sigma_coef(mut self, sigma_coef: f64) -> Self {
        self.inner.sigma_coef = sigma_coef;
        self
    }

    pub fn neighbour_weight(mut self, weight: f64) -> Self {
        self.inner.neighbour_weight = weight;
        self
    }

    pub fn nb_wtm_before(mut self, n: u32) -> Self {
        self.inner.nb_wtm_before = n;
        self
    }

    pub fn nb_wtmchl_after(mut self, n: u32) -> Self {
        self.inner.nb_wtmchl_after = n;
        self
    }

    pub fn nb_threads(mut self, n: usize) -> Self {
        self.inner.nb_threads = n;
        self
    }

    pub fn max_edge_distance(mut self, d: u32) -> Self {
        self.inner.max_edge_distance = d;
        self
    }

    pub fn weight_epsilon(mut self, eps: f64) -> Self {
        self.inner.weight_epsilon = eps;
        self
    }

    pub fn build(self) -> GngTConfig {
        self.inner
    }
}

///////////////////////////////////////////////////////////////////////////////
