//! Core of an online, topology-learning vector quantization engine (Growing
//! Neural Gas with Targets). Given a stream or batch of samples, the engine
//! maintains a weighted graph of prototypes whose vertices track sample
//! density and whose edges track the Delaunay-like neighbourhood topology
//! induced by the samples, growing and pruning the graph across epochs to
//! match a user-chosen target density.
//!
//! The crate is a library, not a standalone service: a host supplies a
//! [`model::Model`] (distance, prototype access, cloning, neighbourhood
//! weight) and drives [`driver::Processor::epoch`] once per batch of
//! samples. See `README.md` for a worked example.

pub mod config;
pub mod driver;
pub mod edge;
pub mod error;
pub mod evolution;
pub mod graph;
pub mod model;
pub mod processors;
pub mod stats;
pub mod topology;
pub mod types;
pub mod vertex;
pub mod vertex_index;

pub use config::{GngTConfig, GngTConfigBuilder};
pub use driver::Processor;
pub use error::{GraphError, GraphResult};
pub use evolution::{DefaultEvolution, Evolution};
pub use graph::Graph;
pub use model::{
    ClosureModel, HasOnlineMeanStd, HasPrototype, Model, Smoother, VectorSpace, VertexData,
    VertexTag,
};
pub use processors::{BmuRecord, BmuStats, Chl, Wta, Wtm};
pub use stats::{OnlineMeanStd, Welford};
pub use topology::neighbourhood;
pub use types::{EdgeRef, EdgeWeak, VertexRef, VertexWeak, Void};
pub use vertex_index::VertexIndex;
