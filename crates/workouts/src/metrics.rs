//! Workout metric formulas.
//!
//! Pure arithmetic over raw reading fields. Nothing here validates its input:
//! a zero duration or height yields `inf`/`NaN` exactly as the arithmetic does.

/// Distance covered per running or walking step, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered per swimming stroke, in meters.
pub const SWIM_STROKE_LENGTH_M: f64 = 1.38;

pub const METERS_PER_KM: f64 = 1000.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Pair of calorie coefficients for one activity kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieCoefficients {
    pub c1: f64,
    pub c2: f64,
}

pub const RUNNING_COEFFICIENTS: CalorieCoefficients = CalorieCoefficients { c1: 18.0, c2: 20.0 };

pub const WALKING_COEFFICIENTS: CalorieCoefficients =
    CalorieCoefficients { c1: 0.035, c2: 0.029 };

pub const SWIMMING_COEFFICIENTS: CalorieCoefficients = CalorieCoefficients { c1: 1.1, c2: 2.0 };

/// Distance in km for `action_count` steps or strokes of `step_length_m` meters each.
pub fn distance_km(action_count: i64, step_length_m: f64) -> f64 {
    action_count as f64 * step_length_m / METERS_PER_KM
}

/// Mean speed in km/h over `duration_h` hours.
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Swimming speed is derived from the pool, not from the stroke count.
pub fn pool_speed_kmh(pool_length_m: f64, pool_laps: i64, duration_h: f64) -> f64 {
    pool_length_m * pool_laps as f64 / METERS_PER_KM / duration_h
}

pub fn running_calories(
    coefficients: CalorieCoefficients,
    speed_kmh: f64,
    weight_kg: f64,
    duration_h: f64,
) -> f64 {
    let CalorieCoefficients { c1, c2 } = coefficients;
    (c1 * speed_kmh - c2) * weight_kg / METERS_PER_KM * duration_h * MINUTES_PER_HOUR
}

/// Calories for sports walking.
///
/// The `speed² / height` term is floor-divided, so the result is a step
/// function of speed: it only changes when `speed²` crosses a multiple of
/// `height_cm`.
pub fn walking_calories(
    coefficients: CalorieCoefficients,
    speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_h: f64,
) -> f64 {
    let CalorieCoefficients { c1, c2 } = coefficients;
    let speed_height_term = floor_div(speed_kmh * speed_kmh, height_cm);
    (c1 * weight_kg + speed_height_term * c2 * weight_kg) * duration_h * MINUTES_PER_HOUR
}

pub fn swimming_calories(
    coefficients: CalorieCoefficients,
    speed_kmh: f64,
    weight_kg: f64,
) -> f64 {
    let CalorieCoefficients { c1, c2 } = coefficients;
    (speed_kmh + c1) * c2 * weight_kg
}

/// Floor division computed from the remainder rather than from the rounded
/// quotient, so `floor_div(1.0, 0.1)` is `9.0`, not `10.0`. A zero divisor
/// is not an error: it yields `inf` or `NaN`.
fn floor_div(lhs: f64, rhs: f64) -> f64 {
    if rhs == 0.0 {
        return (lhs / rhs).floor();
    }

    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && (rhs < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_uses_step_length() {
        assert!((distance_km(15000, STEP_LENGTH_M) - 9.75).abs() < 1e-9);
        assert!((distance_km(-15000, STEP_LENGTH_M) + 9.75).abs() < 1e-9);
        assert!((distance_km(720, SWIM_STROKE_LENGTH_M) - 0.9936).abs() < 1e-9);
        assert_eq!(distance_km(0, STEP_LENGTH_M), 0.0);
    }

    #[test]
    fn test_pool_speed() {
        assert!((pool_speed_kmh(25.0, 40, 1.0) - 1.0).abs() < 1e-9);
        assert!((pool_speed_kmh(50.0, 40, 0.5) - 4.0).abs() < 1e-9);
        assert!((pool_speed_kmh(25.0, -40, 1.0) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_running_calories() {
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
        assert!((running_calories(RUNNING_COEFFICIENTS, 9.75, 75.0, 1.0) - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_walking_floor_division_is_stepped() {
        // 13^2 = 169 < 180, so the speed term contributes nothing.
        let below = walking_calories(WALKING_COEFFICIENTS, 13.0, 75.0, 180.0, 1.0);
        let slower = walking_calories(WALKING_COEFFICIENTS, 5.0, 75.0, 180.0, 1.0);
        assert!((below - slower).abs() < 1e-9);
        assert!((below - 157.5).abs() < 1e-9);

        // 14^2 = 196 >= 180 adds exactly one unit of the speed term.
        let above = walking_calories(WALKING_COEFFICIENTS, 14.0, 75.0, 180.0, 1.0);
        assert!((above - (157.5 + 0.029 * 75.0 * 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_floor_div_uses_remainder() {
        // 1.0 / 0.1 rounds up to 10.0, but 0.1 fits into 1.0 only 9 times.
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(196.0, 180.0), 1.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert!(floor_div(-0.5, 2.0).is_sign_negative());
        assert!(floor_div(1.0, 0.0).is_infinite());
        assert!(floor_div(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_swimming_calories() {
        assert!((swimming_calories(SWIMMING_COEFFICIENTS, 1.0, 80.0) - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_is_not_guarded() {
        assert!(mean_speed_kmh(9.75, 0.0).is_infinite());
        assert!(mean_speed_kmh(0.0, 0.0).is_nan());
        assert!(walking_calories(WALKING_COEFFICIENTS, 5.85, 75.0, 0.0, 1.0).is_infinite());
        assert!(walking_calories(WALKING_COEFFICIENTS, 0.0, 75.0, 0.0, 1.0).is_nan());
    }
}
