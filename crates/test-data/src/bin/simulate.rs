//! Generates a seeded batch of readings and prints their summaries.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin simulate
//! ```

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;
use workouts::{NO_SUCH_TRAINING, render};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let generator = ReadingGenerator::new(GeneratorConfig::default())?;
    let mut rng = StdRng::seed_from_u64(generator.config().seed); // Reproducible data

    let readings = generator.generate(&mut rng);
    tracing::info!("Generated {} readings", readings.len());

    for reading in &readings {
        match summarize(reading)? {
            Some(summary) => {
                let json = serde_json::to_string(&summary)?;
                tracing::debug!(summary = %json, "summary");
                println!("{}", render(&summary));
            }
            None => println!("{NO_SUCH_TRAINING}"),
        }
    }

    Ok(())
}
