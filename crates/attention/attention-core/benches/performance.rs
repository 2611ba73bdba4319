//! Performance benchmarks for attention-core

use std::hint::black_box;
use std::time::Instant;

use attention_core::{coarse_grain, entropy_profile, select_attention, shannon_entropy, AttentionModel};

fn generate_data(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            (100.0 + (t * 0.1).sin() * 10.0 + (t * 0.013).cos() * 3.0).round()
        })
        .collect()
}

fn bench<F, R>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut() -> R,
{
    // Warmup
    for _ in 0..3 {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:34} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== Attention-Scale Performance Benchmarks ===\n");

    let data_10k = generate_data(10_000);
    let data_100k = generate_data(100_000);

    println!("--- Attention Selection (100K) ---");
    for model in AttentionModel::VARIANTS {
        bench(&format!("select {} (100K)", model), 20, || {
            select_attention(&data_100k, model).unwrap()
        });
    }

    println!("\n--- Coarse-Graining ---");
    for model in AttentionModel::VARIANTS {
        bench(&format!("coarse_grain {} s=4 (10K)", model), 200, || {
            coarse_grain(&data_10k, 4, model).unwrap()
        });
        bench(&format!("coarse_grain {} s=4 (100K)", model), 20, || {
            coarse_grain(&data_100k, 4, model).unwrap()
        });
    }

    println!("\n--- Entropy ---");
    bench("shannon_entropy (100K)", 50, || shannon_entropy(&data_100k).unwrap());

    println!("\n--- Profile ---");
    bench("entropy_profile peak 1..=20 (100K)", 5, || {
        entropy_profile(&data_100k, AttentionModel::Peak, 20).unwrap()
    });

    println!("\n=== Benchmark Complete ===");
}
