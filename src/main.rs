use anyhow::Context;
use simdadd::{lane_count, simd_level, try_add_in_place};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut a: Vec<i64> = vec![1, 2, 3, 4, 5];
    let b: Vec<i64> = vec![10, 20, 30, 40, 50];

    tracing::info!(level = %simd_level(), lanes = lane_count(), "adding slices");

    try_add_in_place(&mut a, &b).context("adding slices")?;

    // Expect a == [11, 22, 33, 44, 55]
    println!("Result of adding slices: {a:?}");

    Ok(())
}
