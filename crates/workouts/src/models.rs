use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::{
    self, CalorieCoefficients, RUNNING_COEFFICIENTS, STEP_LENGTH_M, SWIM_STROKE_LENGTH_M,
    SWIMMING_COEFFICIENTS, WALKING_COEFFICIENTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Looks up the kind for a sensor activity code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(Self::Running),
            "WLK" => Some(Self::Walking),
            "SWM" => Some(Self::Swimming),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional fields a reading of this kind carries.
    pub fn field_count(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }

    pub fn step_length_m(self) -> f64 {
        match self {
            Self::Running | Self::Walking => STEP_LENGTH_M,
            Self::Swimming => SWIM_STROKE_LENGTH_M,
        }
    }

    pub fn calorie_coefficients(self) -> CalorieCoefficients {
        match self {
            Self::Running => RUNNING_COEFFICIENTS,
            Self::Walking => WALKING_COEFFICIENTS,
            Self::Swimming => SWIMMING_COEFFICIENTS,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields every workout reading starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps for running and walking, strokes for swimming.
    pub action_count: i64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: Session,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    pub session: Session,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub pool_length_m: f64,
    pub pool_laps: i64,
}

/// A single workout built from one sensor reading.
///
/// Fields are stored raw and every metric is computed on demand. No value is
/// checked: a zero `duration_h` produces `inf`/`NaN` metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    pub fn running(action_count: i64, duration_h: f64, weight_kg: f64) -> Self {
        Self::Running(Running {
            session: Session {
                action_count,
                duration_h,
                weight_kg,
            },
        })
    }

    pub fn walking(action_count: i64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self::Walking(Walking {
            session: Session {
                action_count,
                duration_h,
                weight_kg,
            },
            height_cm,
        })
    }

    pub fn swimming(
        action_count: i64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: i64,
    ) -> Self {
        Self::Swimming(Swimming {
            session: Session {
                action_count,
                duration_h,
                weight_kg,
            },
            pool_length_m,
            pool_laps,
        })
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Running(_) => ActivityKind::Running,
            Self::Walking(_) => ActivityKind::Walking,
            Self::Swimming(_) => ActivityKind::Swimming,
        }
    }

    pub fn session(&self) -> &Session {
        match self {
            Self::Running(w) => &w.session,
            Self::Walking(w) => &w.session,
            Self::Swimming(w) => &w.session,
        }
    }

    pub fn action_count(&self) -> i64 {
        self.session().action_count
    }

    pub fn duration_h(&self) -> f64 {
        self.session().duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.session().weight_kg
    }

    pub fn distance_km(&self) -> f64 {
        metrics::distance_km(self.action_count(), self.kind().step_length_m())
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming(swim) => metrics::pool_speed_kmh(
                swim.pool_length_m,
                swim.pool_laps,
                swim.session.duration_h,
            ),
            _ => metrics::mean_speed_kmh(self.distance_km(), self.duration_h()),
        }
    }

    pub fn spent_calories_kcal(&self) -> f64 {
        let coefficients = self.kind().calorie_coefficients();
        let speed = self.mean_speed_kmh();
        match self {
            Self::Running(run) => metrics::running_calories(
                coefficients,
                speed,
                run.session.weight_kg,
                run.session.duration_h,
            ),
            Self::Walking(walk) => metrics::walking_calories(
                coefficients,
                speed,
                walk.session.weight_kg,
                walk.height_cm,
                walk.session.duration_h,
            ),
            Self::Swimming(swim) => {
                metrics::swimming_calories(coefficients, speed, swim.session.weight_kg)
            }
        }
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            kind: self.kind(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories_kcal(),
        }
    }
}

/// Computed metrics of one workout, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub kind: ActivityKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// One raw sensor package: an activity code and its positional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub code: String,
    pub fields: Vec<f64>,
}

impl Reading {
    pub fn new(code: impl Into<String>, fields: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            fields: fields.into(),
        }
    }
}
