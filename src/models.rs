use serde::{Deserialize, Serialize};

use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;

/// Workout kinds recognised by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutVariant {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutVariant {
    pub const ALL: [WorkoutVariant; 3] = [
        WorkoutVariant::Running,
        WorkoutVariant::SportsWalking,
        WorkoutVariant::Swimming,
    ];

    /// Label used in the rendered report
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutVariant::Running => "Running",
            WorkoutVariant::SportsWalking => "SportsWalking",
            WorkoutVariant::Swimming => "Swimming",
        }
    }

    /// Three-letter code sent by the tracker
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutVariant::Running => "RUN",
            WorkoutVariant::SportsWalking => "WLK",
            WorkoutVariant::Swimming => "SWM",
        }
    }

    /// Number of positional values in a package for this workout
    pub fn arity(&self) -> usize {
        match self {
            WorkoutVariant::Running => 3,
            WorkoutVariant::SportsWalking => 4,
            WorkoutVariant::Swimming => 5,
        }
    }

    /// Distance covered by one step or stroke, in meters
    pub fn step_length_m(&self) -> f64 {
        use crate::training::Training;

        match self {
            WorkoutVariant::Running => Running::STEP_LENGTH_M,
            WorkoutVariant::SportsWalking => SportsWalking::STEP_LENGTH_M,
            WorkoutVariant::Swimming => Swimming::STEP_LENGTH_M,
        }
    }
}

impl std::fmt::Display for WorkoutVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Readings every workout carries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseReadings {
    /// Steps for running and walking, strokes for swimming
    pub action_count: u32,

    /// Session length in hours
    pub duration_hours: f64,

    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl BaseReadings {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Raw tracker sample; each kind owns exactly the fields its formulas use
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSample {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl RawSample {
    pub fn running(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        RawSample::Running(Running::new(BaseReadings::new(
            action_count,
            duration_hours,
            weight_kg,
        )))
    }

    pub fn sports_walking(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        RawSample::SportsWalking(SportsWalking::new(
            BaseReadings::new(action_count, duration_hours, weight_kg),
            height_cm,
        ))
    }

    pub fn swimming(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: u32,
    ) -> Self {
        RawSample::Swimming(Swimming::new(
            BaseReadings::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_lengths_count,
        ))
    }

    pub fn variant(&self) -> WorkoutVariant {
        match self {
            RawSample::Running(_) => WorkoutVariant::Running,
            RawSample::SportsWalking(_) => WorkoutVariant::SportsWalking,
            RawSample::Swimming(_) => WorkoutVariant::Swimming,
        }
    }

    pub fn base(&self) -> &BaseReadings {
        match self {
            RawSample::Running(w) => &w.base,
            RawSample::SportsWalking(w) => &w.base,
            RawSample::Swimming(w) => &w.base,
        }
    }
}

/// Metrics derived from a single sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Distance covered in kilometers
    pub distance_km: f64,

    /// Average speed over the session in km/h
    pub mean_speed_kmh: f64,

    /// Estimated energy expenditure in kcal
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_codes_and_labels() {
        assert_eq!(WorkoutVariant::Running.code(), "RUN");
        assert_eq!(WorkoutVariant::SportsWalking.code(), "WLK");
        assert_eq!(WorkoutVariant::Swimming.code(), "SWM");
        assert_eq!(WorkoutVariant::SportsWalking.to_string(), "SportsWalking");
    }

    #[test]
    fn test_step_lengths() {
        assert_eq!(WorkoutVariant::Running.step_length_m(), 0.65);
        assert_eq!(WorkoutVariant::SportsWalking.step_length_m(), 0.65);
        assert_eq!(WorkoutVariant::Swimming.step_length_m(), 1.38);
    }

    #[test]
    fn test_sample_variant_and_base() {
        let sample = RawSample::swimming(720, 1.0, 80.0, 25.0, 40);
        assert_eq!(sample.variant(), WorkoutVariant::Swimming);
        assert_eq!(sample.base().action_count, 720);
        assert_eq!(sample.base().weight_kg, 80.0);
    }
}
