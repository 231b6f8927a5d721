use criterion::Throughput;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use gngt_core::{DefaultEvolution, Graph, GngTConfig, Model, Processor, VertexData, Void};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Point2 {
    x: f64,
    y: f64,
}

impl gngt_core::VectorSpace for Point2 {
    fn zero() -> Self {
        Point2 { x: 0.0, y: 0.0 }
    }

    fn add(&self, other: &Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    fn scale(&self, factor: f64) -> Self {
        Point2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

type PlaneVertex = VertexData<Point2>;

struct PlaneModel;

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
        VertexData::new(Point2 {
            x: value.prototype.x + 1e-3,
            y: value.prototype.y + 1e-3,
        })
    }

    fn seed_vertex(&self, sample: &Point2) -> PlaneVertex {
        VertexData::new(*sample)
    }

    fn neighbour_weight(&self, edge_distance: u32) -> f64 {
        if edge_distance == 0 {
            1.0
        } else {
            0.2
        }
    }

    fn default_edge_value(&self) -> Void {
        Void
    }
}

fn uniform_samples(n: usize) -> Vec<Point2> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Point2 {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
        })
        .collect()
}

// ============================================================================

fn bench_epoch(c: &mut Criterion) {
    static B: usize = 500;

    let mut group = c.benchmark_group("GNG-T Epoch");
    for (i, size) in [B, 2 * B, 4 * B, 8 * B].iter().enumerate() {
        group.throughput(Throughput::Elements(*size as u64));

        let samples = uniform_samples(*size);
        let model = PlaneModel;
        let evolution = DefaultEvolution::new(1.5, 0.3);
        let config = GngTConfig::builder()
            .nb_wtm_before(1)
            .nb_wtmchl_after(1)
            .nb_threads(4)
            .max_edge_distance(2)
            .weight_epsilon(1e-3)
            .build();

        group.bench_with_input(BenchmarkId::new("epoch", size), &i, |b, _| {
            b.iter(|| {
                let mut graph: Graph<PlaneVertex, Void> = Graph::new();
                let mut proc = Processor::with_graph(&mut graph);
                for _ in 0..5 {
                    proc.epoch(&mut graph, &config, &samples, &model, &evolution)
                        .unwrap();
                }
            })
        });
    }
    group.finish();
}

// ============================================================================

fn bench_wtm_pass(c: &mut Criterion) {
    static B: usize = 1000;

    let mut group = c.benchmark_group("WTM Pass");
    for (i, size) in [B, 2 * B, 4 * B].iter().enumerate() {
        group.throughput(Throughput::Elements(*size as u64));

        let samples = uniform_samples(*size);
        let model = PlaneModel;

        let mut graph: Graph<PlaneVertex, Void> = Graph::new();
        let mut prev = None;
        for _ in 0..32 {
            let v = graph.add_vertex(VertexData::new(Point2 {
                x: rand::thread_rng().gen_range(0.0..1.0),
                y: rand::thread_rng().gen_range(0.0..1.0),
            }));
            if let Some(p) = prev {
                let _ = graph.connect(&p, &v, Void);
            }
            prev = Some(v);
        }
        let proc = Processor::with_graph(&mut graph);
        let wtm = gngt_core::Wtm;

        group.bench_with_input(BenchmarkId::new("update_prototypes", size), &i, |b, _| {
            b.iter(|| {
                wtm.update_prototypes(proc.index(), 4, &samples, &model, 2, 1e-3)
                    .unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_epoch, bench_wtm_pass);
criterion_main!(benches);
