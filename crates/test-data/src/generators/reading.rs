//! Reading generation from athlete profiles.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;
use workouts::{ActivityKind, Reading};

use crate::config::{ConfigError, GeneratorConfig};
use crate::profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance};

/// Generates batches of raw readings.
pub struct ReadingGenerator {
    config: GeneratorConfig,
}

impl ReadingGenerator {
    /// Creates a generator, rejecting configs whose ranges cannot be sampled.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates `readings_per_kind` readings for each activity kind, grouped by kind.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Reading> {
        let total = self.config.readings_per_kind * ActivityKind::ALL.len();
        let mut readings = Vec::with_capacity(total);
        for kind in ActivityKind::ALL {
            for _ in 0..self.config.readings_per_kind {
                readings.push(self.reading_for(kind, rng));
            }
        }
        debug!(count = readings.len(), "generated readings");
        readings
    }

    /// Generates one reading of the given kind with a randomly chosen profile.
    pub fn reading_for(&self, kind: ActivityKind, rng: &mut impl Rng) -> Reading {
        let profile = self.profile_for(kind, rng);
        let variance_factor = sample_variance(&*profile, rng);
        let duration_h = rng.gen_range(self.config.duration_h.clone());
        let weight_kg = rng.gen_range(self.config.weight_kg.clone());
        profile.reading(duration_h, weight_kg, variance_factor)
    }

    fn profile_for(&self, kind: ActivityKind, rng: &mut impl Rng) -> Box<dyn AthleteProfile> {
        match kind {
            ActivityKind::Running => {
                let profile = match rng.gen_range(0..10) {
                    0 => RunnerProfile::elite(),
                    1..=3 => RunnerProfile::recreational(),
                    _ => RunnerProfile::default(),
                };
                Box::new(profile)
            }
            ActivityKind::Walking => {
                let height_cm = rng.gen_range(self.config.height_cm.clone());
                let profile = if rng.gen_bool(0.1) {
                    WalkerProfile::race_walker()
                } else {
                    WalkerProfile::default()
                };
                Box::new(profile.with_height(height_cm))
            }
            ActivityKind::Swimming => {
                let pool_length_m = self
                    .config
                    .pool_lengths_m
                    .choose(rng)
                    .copied()
                    .unwrap_or(25.0);
                Box::new(SwimmerProfile::default().in_pool(pool_length_m))
            }
        }
    }
}
