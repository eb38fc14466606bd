//! Swimmer athletic profile.

use workouts::{ActivityKind, Reading};

use super::{AthleteProfile, actions_for_distance};

/// Athletic profile for pool swimming.
///
/// - Base speed: ~2.5 km/h
/// - Laps are whole lengths of the pool; strokes follow from the swum distance
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    pool_length_m: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.5,
            variance: 0.10,
            pool_length_m: 25.0,
        }
    }
}

impl SwimmerProfile {
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    pub fn in_pool(mut self, pool_length_m: f64) -> Self {
        self.pool_length_m = pool_length_m;
        self
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Creates a competitive swimmer profile (~4 km/h base) in a 50 m pool.
    pub fn competitive() -> Self {
        Self::with_speed(4.0).in_pool(50.0)
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn reading(&self, duration_h: f64, weight_kg: f64, variance_factor: f64) -> Reading {
        let distance_km = self.base_speed * variance_factor * duration_h;
        let laps = (distance_km * workouts::metrics::METERS_PER_KM / self.pool_length_m).floor();
        let strokes = actions_for_distance(distance_km, self.kind().step_length_m());
        Reading::new(
            self.kind().code(),
            [strokes, duration_h, weight_kg, self.pool_length_m, laps],
        )
    }
}
