use std::time::Instant;

use life_board::patterns::random_cells;
use life_board::{Board, advance_quiet};

fn bench_advance(size: usize, density: f64, iterations: u64) -> (f64, usize) {
    let mut board = Board::from_cells(&random_cells(size, size, density, 0x5EED_1234_ABCD_EF01))
        .expect("random soup is rectangular");

    let start = Instant::now();
    for _ in 0..iterations {
        board = advance_quiet(&board);
    }
    let duration = start.elapsed();

    (duration.as_secs_f64() * 1000.0, board.population())
}

fn main() {
    let scales: &[(usize, u64)] = &[(64, 200), (128, 100), (256, 50), (512, 20), (1024, 5)];

    println!(
        "{:<10} {:>10} {:>8} {:>12} {:>10}",
        "Grid", "Cells", "Iters", "Total(ms)", "Avg(ms)"
    );
    println!("{}", "-".repeat(54));

    for &(size, iters) in scales {
        let (total_ms, _pop) = bench_advance(size, 0.42, iters);
        let avg_ms = total_ms / iters as f64;
        println!(
            "{:<10} {:>10} {:>8} {:>12.1} {:>10.4}",
            format!("{}x{}", size, size),
            size * size,
            iters,
            total_ms,
            avg_ms
        );
    }
}
