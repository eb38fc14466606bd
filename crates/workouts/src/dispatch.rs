//! Mapping of raw sensor packages onto workouts.

use tracing::{debug, warn};

use crate::{
    errors::{Result, WorkoutError},
    models::{ActivityKind, Reading, Workout, WorkoutSummary},
};

/// Builds the workout for `code` from its positional `fields`.
///
/// Returns `Ok(None)` when `code` names no known activity. A field count
/// that does not match the activity is an [`WorkoutError::ArityMismatch`];
/// fields are never padded or truncated.
pub fn dispatch(code: &str, fields: &[f64]) -> Result<Option<Workout>> {
    let Some(kind) = ActivityKind::from_code(code) else {
        warn!(code, "unrecognized activity code");
        return Ok(None);
    };

    debug!(%kind, ?fields, "dispatching reading");

    let workout = match (kind, fields) {
        (ActivityKind::Running, &[action, duration_h, weight_kg]) => {
            Workout::running(count(action), duration_h, weight_kg)
        }
        (ActivityKind::Walking, &[action, duration_h, weight_kg, height_cm]) => {
            Workout::walking(count(action), duration_h, weight_kg, height_cm)
        }
        (ActivityKind::Swimming, &[action, duration_h, weight_kg, pool_length_m, pool_laps]) => {
            Workout::swimming(
                count(action),
                duration_h,
                weight_kg,
                pool_length_m,
                count(pool_laps),
            )
        }
        _ => {
            let expected = kind.field_count();
            warn!(%kind, expected, actual = fields.len(), "reading has wrong field count");
            return Err(WorkoutError::ArityMismatch {
                kind,
                expected,
                actual: fields.len(),
            });
        }
    };

    Ok(Some(workout))
}

/// Dispatches a reading and computes its summary.
pub fn summarize(reading: &Reading) -> Result<Option<WorkoutSummary>> {
    Ok(dispatch(&reading.code, &reading.fields)?.map(|workout| workout.summary()))
}

/// Parses a JSON array of readings, e.g. `[{"code": "RUN", "fields": [15000, 1, 75]}]`.
pub fn parse_batch(json: &str) -> Result<Vec<Reading>> {
    Ok(serde_json::from_str(json)?)
}

/// Count fields arrive as plain numbers; the fractional part is dropped and
/// the sign is kept. NaN reads as zero.
fn count(value: f64) -> i64 {
    value as i64
}
