//! Configuration types for reading generation.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Empty range for {0}")]
    EmptyRange(&'static str),

    #[error("No pool lengths configured")]
    NoPoolLengths,
}

/// Configuration for generating a batch of readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of readings to generate for each activity kind.
    pub readings_per_kind: usize,

    /// Session duration in hours.
    pub duration_h: Range<f64>,

    /// Athlete weight in kg.
    pub weight_kg: Range<f64>,

    /// Walker height in cm.
    pub height_cm: Range<f64>,

    /// Pool lengths swimmers pick from, in meters.
    pub pool_lengths_m: Vec<f64>,

    /// Seed for reproducible batches.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            readings_per_kind: 10,
            duration_h: 0.25..2.5,
            weight_kg: 50.0..110.0,
            height_cm: 150.0..200.0,
            pool_lengths_m: vec![25.0, 50.0],
            seed: 12345,
        }
    }
}

impl GeneratorConfig {
    /// Checks that every range can be sampled from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, range) in [
            ("duration_h", &self.duration_h),
            ("weight_kg", &self.weight_kg),
            ("height_cm", &self.height_cm),
        ] {
            if range.is_empty() {
                return Err(ConfigError::EmptyRange(name));
            }
        }
        if self.pool_lengths_m.is_empty() {
            return Err(ConfigError::NoPoolLengths);
        }
        Ok(())
    }
}
