///////////////////////////////////////////////////////////////////////////////
///
/// WELFORD ACCUMULATOR
///
/// Numerically stable online `(count, mean, variance)` estimate of a
/// stream of values. Used both as the per-pass BMU-statistics
/// accumulator and, longer-lived, as the optional per-vertex smoothing
/// decoration consulted by `Evolution`.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Welford {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Welford {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance, clamped to zero: floating-point noise can drive
    /// the raw `m2 / count` computation very slightly negative.
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.m2 / self.count as f64).max(0.0)
        }
    }

    pub fn std(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Folds one more observation in, Welford-style.
    pub fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = x - self.mean;
        self.m2 += delta * delta2;
    }

    /// Combines two independently accumulated estimates into one, using
    /// Chan et al.'s parallel-variance formula. Commutative and
    /// associative up to floating-point rounding, which is what lets the
    /// per-thread accumulators in an epoch pass be reduced in any order.
    pub fn merge(self, other: Welford) -> Welford {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }
        let count = self.count + other.count;
        let delta = other.mean - self.mean;
        let mean = self.mean + delta * (other.count as f64 / count as f64);
        let m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f64 * other.count as f64 / count as f64);
        Welford { count, mean, m2 }
    }
}

///////////////////////////////////////////////////////////////////////////////
///
/// ONLINE MEAN/STD DECORATION
///
/// A low-pass filter over successive epochs' BMU statistics: each epoch's
/// `(count, mean, variance)` is folded in once. `Evolution` consults this
/// when a vertex carries it, to smooth noisy single-epoch estimates rather
/// than reacting to them directly.

#[derive(Clone, Copy, Debug, Default)]
pub struct OnlineMeanStd {
    inner: Welford,
    valid: bool,
}

impl OnlineMeanStd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn mean(&self) -> f64 {
        self.inner.mean()
    }

    pub fn std(&self) -> f64 {
        self.inner.std()
    }

    /// Feeds one epoch's BMU distortion mean in as a single observation.
    pub fn observe(&mut self, epoch_mean: f64) {
        self.inner.update(epoch_mean);
        self.valid = true;
    }
}

///////////////////////////////////////////////////////////////////////////////
