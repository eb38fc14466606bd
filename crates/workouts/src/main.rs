use std::io::Write;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{NO_SUCH_TRAINING, Reading, render, summarize};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn packages() -> Vec<Reading> {
    vec![
        Reading::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Reading::new("RUN", [15000.0, 1.0, 75.0]),
        Reading::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut out = std::io::stdout().lock();
    for reading in packages() {
        match summarize(&reading) {
            Ok(Some(summary)) => writeln!(out, "{}", render(&summary))?,
            Ok(None) => writeln!(out, "{NO_SUCH_TRAINING}")?,
            Err(e) => {
                tracing::error!(code = %reading.code, error = %e, "skipping reading");
                writeln!(out, "Invalid {} reading: {e}", reading.code)?;
            }
        }
    }

    Ok(())
}
