//! Test data generation for workouts.
//!
//! This crate generates realistic raw sensor readings for every activity kind,
//! for property checks of the workout formulas and for manual inspection.
//!
//! # Quick Start
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let generator = ReadingGenerator::new(GeneratorConfig::default())?;
//! let mut rng = StdRng::seed_from_u64(generator.config().seed);
//! for reading in generator.generate(&mut rng) {
//!     assert!(summarize(&reading)?.is_some());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, GeneratorConfig};
    pub use crate::generators::ReadingGenerator;
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use workouts::{ActivityKind, Reading, WorkoutSummary, summarize};
}
