//! Text rendering of workout summaries.

use std::fmt;

use crate::models::WorkoutSummary;

/// Printed instead of a summary when a reading names an unknown activity.
pub const NO_SUCH_TRAINING: &str = "No such training.";

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.kind.label(),
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

/// Renders a summary as a single line, every figure to three decimal places.
pub fn render(summary: &WorkoutSummary) -> String {
    summary.to_string()
}
