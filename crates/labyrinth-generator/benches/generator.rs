//! Benchmarks for maze generation.
//!
//! # Benchmarks
//!
//! - **`generator`**: Generates a maze of each size from a fixed seed,
//!   starting at the top-left cell. The grid is allocated once per size and
//!   reset by every run, as in an interactive session.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use labyrinth_core::{Coordinate, Grid};
use labyrinth_generator::{MazeGenerator, MazeSeed};

const SIZES: [(u32, u32); 3] = [(20, 10), (64, 64), (256, 256)];
const SEED: u64 = 0x5e_ed0f_1abe;

fn bench_generator(c: &mut Criterion) {
    let generator = MazeGenerator::new();

    for (width, height) in SIZES {
        let mut grid = Grid::new(width, height).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator", format!("{width}x{height}")),
            &MazeSeed::from(SEED),
            |b, &seed| {
                b.iter(|| {
                    generator
                        .generate_with_seed(&mut grid, Coordinate::ORIGIN, hint::black_box(seed))
                        .unwrap()
                });
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator
);
criterion_main!(benches);
