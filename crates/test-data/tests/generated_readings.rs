//! Formula properties checked over seeded batches of generated readings.

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;
use workouts::{Workout, dispatch, parse_batch, render};

fn batch(readings_per_kind: usize, seed: u64) -> Vec<Reading> {
    let generator = ReadingGenerator::new(GeneratorConfig {
        readings_per_kind,
        seed,
        ..Default::default()
    })
    .expect("default ranges are valid");
    generator.generate(&mut StdRng::seed_from_u64(seed))
}

fn workouts_of(readings: &[Reading], kind: ActivityKind) -> Vec<Workout> {
    readings
        .iter()
        .filter(|r| r.code == kind.code())
        .map(|r| {
            dispatch(&r.code, &r.fields)
                .expect("generated readings have the right arity")
                .expect("generated readings use known codes")
        })
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_every_generated_reading_summarizes() {
    for reading in batch(25, 11) {
        let summary = summarize(&reading).unwrap().unwrap();
        assert_eq!(summary.kind.code(), reading.code);
        assert!(summary.distance_km.is_finite() && summary.distance_km > 0.0);
        assert!(summary.calories_kcal.is_finite());
    }
}

#[test]
fn test_running_properties() {
    for run in workouts_of(&batch(50, 21), ActivityKind::Running) {
        let distance = run.action_count() as f64 * 0.65 / 1000.0;
        let speed = distance / run.duration_h();
        let calories =
            (18.0 * speed - 20.0) * run.weight_kg() / 1000.0 * run.duration_h() * 60.0;

        assert!(close(run.distance_km(), distance));
        assert!(close(run.mean_speed_kmh(), speed));
        assert!(close(run.spent_calories_kcal(), calories));
    }
}

#[test]
fn test_swimming_speed_comes_from_the_pool() {
    for swim in workouts_of(&batch(50, 31), ActivityKind::Swimming) {
        let Workout::Swimming(inner) = swim else {
            panic!("SWM dispatched to {:?}", swim.kind());
        };
        let speed = inner.pool_length_m * inner.pool_laps as f64 / 1000.0 / swim.duration_h();

        assert!(close(swim.mean_speed_kmh(), speed));
        assert!(close(swim.distance_km(), swim.action_count() as f64 * 1.38 / 1000.0));
        assert!(close(
            swim.spent_calories_kcal(),
            (speed + 1.1) * 2.0 * swim.weight_kg()
        ));
    }
}

#[test]
fn test_walking_calories_are_stepped() {
    // With weight, height and duration fixed, calories can only take the
    // values (0.035 + k * 0.029) * weight * duration * 60 for whole k.
    let (duration_h, weight_kg, height_cm) = (1.0, 70.0, 100.0);
    let mut previous = f64::MIN;
    for speed_tenths in 10..200 {
        let profile = WalkerProfile::with_speed(speed_tenths as f64 / 10.0).with_height(height_cm);
        let reading = profile.reading(duration_h, weight_kg, 1.0);
        let walk = dispatch(&reading.code, &reading.fields).unwrap().unwrap();

        let calories = walk.spent_calories_kcal();
        let base = 0.035 * weight_kg * duration_h * 60.0;
        let unit = 0.029 * weight_kg * duration_h * 60.0;
        let k = (calories - base) / unit;

        assert!((k - k.round()).abs() < 1e-6, "k = {k} at {speed_tenths}");
        assert_eq!(k.round(), (walk.mean_speed_kmh().powi(2) / height_cm).floor());
        assert!(calories >= previous);
        previous = calories;
    }
}

#[test]
fn test_rendered_lines_have_three_decimals() {
    for reading in batch(10, 41) {
        let line = render(&summarize(&reading).unwrap().unwrap());
        let figures: Vec<&str> = line
            .split("; ")
            .filter_map(|part| part.split_whitespace().find(|t| t.contains('.')))
            .map(|t| t.trim_end_matches('.'))
            .collect();

        assert_eq!(figures.len(), 4, "{line}");
        for figure in figures {
            let decimals = figure.rsplit('.').next().unwrap_or_default();
            assert_eq!(decimals.len(), 3, "{line}");
        }
    }
}

#[test]
fn test_batch_survives_json() {
    let readings = batch(3, 51);
    let json = serde_json::to_string(&readings).unwrap();
    assert_eq!(parse_batch(&json).unwrap(), readings);
}
