use fixed_matrix::matrix::matrix::Matrix;
use fixed_matrix::matrix::reduce::DegenerateMatrix;
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

// How many inversions to attempt, split across the workers.
const TEST_COUNT: u32 = 1_000_000;
const DIMENSION: usize = 7;

fn random_matrix(rng: &mut impl Rng) -> Matrix<f64> {
    Matrix::from_rows(
        (0..DIMENSION)
            .map(|_| {
                (0..DIMENSION)
                    .map(|_| rng.gen_range(-10..=10) as f64)
                    .collect()
            })
            .collect(),
    )
    .expect("shape is fixed")
}

// Invert `test_count` random matrices, timing only the inversion calls.
// Each worker owns its generator and its matrices; nothing is shared.
fn time_random_matrices(test_count: u32) -> (Duration, u32, u32) {
    let mut rng = rand::thread_rng();
    let mut elapsed = Duration::ZERO;
    let mut nonsingular = 0u32;
    let mut degenerate = 0u32;

    for _ in 0..test_count {
        let mut matrix = random_matrix(&mut rng);

        let start = Instant::now();
        match matrix.invert() {
            Ok(()) => nonsingular += 1,
            Err(DegenerateMatrix) => degenerate += 1,
        }
        elapsed += start.elapsed();
    }
    (elapsed, nonsingular, degenerate)
}

fn main() {
    let threads: u32 = 8;
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global();

    let results: Vec<(Duration, u32, u32)> = (0..threads)
        .into_par_iter()
        .map(|_| time_random_matrices(TEST_COUNT / threads))
        .collect();

    let elapsed: Duration = results.iter().map(|r| r.0).sum();
    let nonsingular: u32 = results.iter().map(|r| r.1).sum();
    let degenerate: u32 = results.iter().map(|r| r.2).sum();
    let tested = nonsingular + degenerate;

    println!("[ ] Nonsingular: {}; degenerate: {}.", nonsingular, degenerate);
    println!(
        "[ ] Time spent in inversion functions: {:.3} s.",
        elapsed.as_secs_f64()
    );
    println!(
        "[ ] Average inversion time per matrix: {:.9} s.",
        elapsed.as_secs_f64() / f64::from(tested)
    );
}
