//! Basic example demonstrating attention-scale coarse-graining
//!
//! Run with: cargo run --example basic -p attention-facade
//! Set RUST_LOG=attention_core=debug to see selection and profile events.

use attention_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "attention_core=info".into()))
        .init();

    println!("=== attention-facade Basic Examples ===\n");

    let series = vec![1.0, 2.0, 3.0, 4.0, 5.0, 3.0, 1.0, 3.0, 0.0, 4.0, 2.0, 1.0, 3.0];
    println!("Series: {:?}\n", series);

    // 1. Attention points per model
    println!("1. Attention points");
    for model in AttentionModel::VARIANTS {
        let indices = select_attention(&series, model)?;
        println!("   {:<6} ({}): {:?}", model.name(), model.tag(), indices.as_slice());
    }

    // 2. Coarse-graining at scale 2
    println!("\n2. Coarse-grained series (scale 2)");
    for model in AttentionModel::VARIANTS {
        let grained = coarse_grain_detailed(&series, 2, model)?;
        println!(
            "   {:<6} separators={:?} values={:?} entropy={:.4}",
            model.name(),
            grained.separators,
            grained.values.iter().map(|v| format!("{:.3}", v)).collect::<Vec<_>>(),
            shannon_entropy(&grained.values)?
        );
    }

    // 3. Entropy profile
    println!("\n3. Entropy profile (PEAK, scales 1..=5)");
    let wave: Vec<f64> = (0..500).map(|i| (((i as f64) * 0.3).sin() * 10.0).round()).collect();
    let profile = Profiler::from_config(ProfileConfig::new(AttentionModel::Peak, 5))?.run(&wave)?;
    for point in &profile.points {
        println!(
            "   scale={} length={} entropy={:.4}",
            point.scale_factor, point.length, point.entropy
        );
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
