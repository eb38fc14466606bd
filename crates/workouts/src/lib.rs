//! Workout statistics from raw fitness-tracker readings.
//!
//! A reading is an activity code plus positional numeric fields. [`dispatch`]
//! turns it into a [`Workout`], whose summary renders as one line of text:
//!
//! ```
//! use workouts::{dispatch, render};
//!
//! let workout = dispatch("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?.unwrap();
//! assert_eq!(
//!     render(&workout.summary()),
//!     "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
//!      Avg speed: 1.000 km/h; Calories: 336.000."
//! );
//! # Ok::<(), workouts::WorkoutError>(())
//! ```

pub mod dispatch;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod summary;

pub use dispatch::{dispatch, parse_batch, summarize};
pub use errors::{Result, WorkoutError};
pub use models::{ActivityKind, Reading, Workout, WorkoutSummary};
pub use summary::{NO_SUCH_TRAINING, render};
