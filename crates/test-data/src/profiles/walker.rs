//! Walker athletic profile.

use workouts::{ActivityKind, Reading};

use super::{AthleteProfile, actions_for_distance};

/// Athletic profile for sports walking.
///
/// - Base speed: ~6 km/h
/// - Height matters: it feeds the walking calorie formula
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    height_cm: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            variance: 0.12,
            height_cm: 175.0,
        }
    }
}

impl WalkerProfile {
    /// Creates a new walker profile with specified base speed.
    ///
    /// # Arguments
    /// * `speed_kmh` - Base speed in km/h
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }

    pub fn with_variance(mut self, variance: f64) -> Self {
        self.variance = variance;
        self
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Creates a race walker profile (~12 km/h base).
    pub fn race_walker() -> Self {
        Self::with_speed(12.0)
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn reading(&self, duration_h: f64, weight_kg: f64, variance_factor: f64) -> Reading {
        let distance_km = self.base_speed * variance_factor * duration_h;
        let steps = actions_for_distance(distance_km, self.kind().step_length_m());
        Reading::new(
            self.kind().code(),
            [steps, duration_h, weight_kg, self.height_cm],
        )
    }
}
