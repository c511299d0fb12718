//! Running calculations
//!
//! Uses the shared step-based distance and speed; calories grow linearly with
//! mean speed.

use serde::{Deserialize, Serialize};

use crate::models::BaseReadings;
use crate::training::{Training, MIN_IN_H, M_IN_KM};

/// Running session readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub base: BaseReadings,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(base: BaseReadings) -> Self {
        Self { base }
    }
}

impl Training for Running {
    const STEP_LENGTH_M: f64 = 0.65;

    fn base(&self) -> &BaseReadings {
        &self.base
    }

    fn calories_kcal(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * self.base.duration_hours
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_run() -> Running {
        Running::new(BaseReadings::new(15000, 1.0, 75.0))
    }

    #[test]
    fn test_reference_run() {
        let run = reference_run();

        assert_eq!(run.distance_km(), 9.75);
        assert_eq!(run.mean_speed_kmh(), 9.75);
        assert_eq!(format!("{:.3}", run.calories_kcal()), "797.805");
    }

    #[test]
    fn test_speed_is_distance_over_duration() {
        let run = Running::new(BaseReadings::new(12000, 1.5, 70.0));
        assert_eq!(run.mean_speed_kmh(), run.distance_km() / 1.5);
    }

    #[test]
    fn test_calories_do_not_depend_on_call_order() {
        let run = reference_run();
        let first = run.calories_kcal();
        let _ = run.mean_speed_kmh();
        assert_eq!(run.calories_kcal(), first);
    }

    #[test]
    fn test_metrics() {
        let metrics = reference_run().metrics().unwrap();
        assert_eq!(metrics.distance_km, 9.75);
        assert_eq!(metrics.mean_speed_kmh, 9.75);
    }
}
