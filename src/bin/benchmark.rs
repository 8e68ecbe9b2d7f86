//! Step throughput: serial vs rayon-parallel evolution

use std::time::Instant;

use life_canvas::{Grid, domain::DEFAULT_DENSITY};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    Grid::random(size, DEFAULT_DENSITY, &mut rng)
}

/// Average milliseconds per generation
fn benchmark(size: usize, iterations: u32, evolve: fn(&Grid) -> Grid) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = evolve(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [30, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Grid::evolve);
        let parallel_ms = benchmark(size, iterations, Grid::evolve_parallel);

        println!(
            "{:>10} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
