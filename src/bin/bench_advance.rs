#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::Instant;

use life_board::patterns::{self, random_cells};
use life_board::{Board, Life};

fn bench(label: &str, board: Board, iterations: u64) {
    let mut life = Life::new(board);
    // Warm up: let the soup's bounds settle.
    life.step_n(2);

    let mut changes = 0usize;
    let start = Instant::now();
    for _ in 0..iterations {
        changes += life.step_with(|_, _| {});
    }
    let elapsed = start.elapsed();

    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_us = total_ms * 1000.0 / iterations as f64;
    println!(
        "{:<28} {:>6} iters  {:>10.1} ms total  {:>10.1} us/step  pop={}  changes={}",
        label,
        iterations,
        total_ms,
        avg_us,
        life.population(),
        changes
    );
}

fn soup(size: usize, density: f64) -> Board {
    Board::from_cells(&random_cells(size, size, density, 0xBEEF_CAFE))
        .expect("random soup is rectangular")
}

fn main() {
    println!("=== life-board advance benchmark ===\n");

    let glider = patterns::find("glider")
        .and_then(|p| p.board().ok())
        .expect("built-in glider");
    bench("glider (tiny)", glider, 10_000);
    bench("small 64x64 d=0.3", soup(64, 0.3), 500);
    bench("medium 128x128 d=0.3", soup(128, 0.3), 200);
    bench("medium 256x256 d=0.3", soup(256, 0.3), 100);
    bench("large 512x512 d=0.42", soup(512, 0.42), 20);
    bench("sparse 512x512 d=0.05", soup(512, 0.05), 50);
}
