//! Shared fixtures for the integration test suite: a 2D point `Sample`, a
//! `Model` comparing it by Euclidean distance, and small graph-building
//! helpers. Not itself a test module (no `#[test]` fns); included with
//! `mod common;` from each test binary.
#![allow(dead_code)]

use gngt_core::{Model, VectorSpace, VertexData, Void};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

impl VectorSpace for Point2 {
    fn zero() -> Self {
        Point2::new(0.0, 0.0)
    }

    fn add(&self, other: &Self) -> Self {
        Point2::new(self.x + other.x, self.y + other.y)
    }

    fn scale(&self, factor: f64) -> Self {
        Point2::new(self.x * factor, self.y * factor)
    }
}

pub type PlaneVertex = VertexData<Point2>;

/// A model over the plane: samples and prototypes are both `Point2`,
/// compared by Euclidean distance. `neighbour_weight` is a flat
/// SOM-neighbourhood constant (same value at every non-zero edge
/// distance).
pub struct PlaneModel {
    pub neighbour_weight: f64,
}

impl PlaneModel {
    pub fn new(neighbour_weight: f64) -> Self {
        PlaneModel { neighbour_weight }
    }
}

impl Model<Point2, Point2, PlaneVertex, Void> for PlaneModel {
    fn sample_of(&self, item: &Point2) -> Point2 {
        *item
    }

    fn distance(&self, value: &PlaneVertex, sample: &Point2) -> f64 {
        let dx = value.prototype.x - sample.x;
        let dy = value.prototype.y - sample.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn clone_prototype(&self, value: &PlaneVertex) -> PlaneVertex {
        VertexData::new(Point2::new(
            value.prototype.x + 1e-3,
            value.prototype.y + 1e-3,
        ))
    }

    fn seed_vertex(&self, sample: &Point2) -> PlaneVertex {
        VertexData::new(*sample)
    }

    fn neighbour_weight(&self, edge_distance: u32) -> f64 {
        if edge_distance == 0 {
            1.0
        } else {
            self.neighbour_weight
        }
    }

    fn default_edge_value(&self) -> Void {
        Void
    }
}

/// A deterministic (no RNG) roughly-uniform grid over `[0, 1]^2`, `side *
/// side` samples.
pub fn grid_samples(side: usize) -> Vec<Point2> {
    let mut samples = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            let x = i as f64 / (side - 1) as f64;
            let y = j as f64 / (side - 1) as f64;
            samples.push(Point2::new(x, y));
        }
    }
    samples
}
