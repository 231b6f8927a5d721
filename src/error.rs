use thiserror::Error;

/// Contract violations detected by the graph substrate or the driver.
///
/// These always indicate a programmer error (a caller violating a
/// documented precondition), never a property of the input data.
/// Degenerate inputs (an empty sample range, a vertex that wins no
/// samples) are handled without raising an error at all.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex does not belong to this graph")]
    ForeignVertex,

    #[error("distance() returned a non-finite value for a sample")]
    NonFiniteDistance,

    #[error("neighbour_weight(0) must equal 1.0, got {0}")]
    BadNeighbourWeightAtZero(f64),

    #[error("epoch() was called with nb_wtm_before == 0")]
    ZeroWtmBeforePasses,
}

pub type GraphResult<T> = Result<T, GraphError>;
