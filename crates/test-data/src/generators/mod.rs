//! Generators for test data.
//!
//! - [`ReadingGenerator`]: Generate sensor readings for every activity kind

pub mod reading;

pub use reading::ReadingGenerator;
