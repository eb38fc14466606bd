//! Athletic performance profiles.
//!
//! Profiles define realistic speeds for each activity kind and turn them into
//! raw sensor readings with the field layout the workouts crate dispatches on.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::{ActivityKind, Reading};

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The activity kind their readings belong to
/// - Base speed for a steady session
/// - Day-to-day variance
/// - The reading a session of a given length produces
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> ActivityKind;

    /// Base speed in km/h.
    fn base_speed_kmh(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;

    /// Builds the raw reading for a session of `duration_h` hours at
    /// `base_speed_kmh() * variance_factor`.
    fn reading(&self, duration_h: f64, weight_kg: f64, variance_factor: f64) -> Reading;
}

/// Number of whole steps or strokes needed to cover `distance_km`.
pub(crate) fn actions_for_distance(distance_km: f64, step_length_m: f64) -> f64 {
    (distance_km * workouts::metrics::METERS_PER_KM / step_length_m).round()
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    let std_dev = profile.variance();
    if std_dev <= 0.0 {
        return 1.0;
    }
    match Normal::new(1.0, std_dev) {
        Ok(normal) => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        Err(_) => 1.0,
    }
}
