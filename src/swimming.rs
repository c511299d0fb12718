//! Swimming calculations
//!
//! Distance still comes from the stroke count, but mean speed is measured from
//! the pool: length of the pool times the number of lengths swum.

use serde::{Deserialize, Serialize};

use crate::models::BaseReadings;
use crate::training::{Training, M_IN_KM};

/// Pool swimming session readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub base: BaseReadings,

    /// Pool length in meters
    pub pool_length_m: f64,

    /// Number of pool lengths swum
    pub pool_lengths_count: u32,
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(base: BaseReadings, pool_length_m: f64, pool_lengths_count: u32) -> Self {
        Self {
            base,
            pool_length_m,
            pool_lengths_count,
        }
    }
}

impl Training for Swimming {
    const STEP_LENGTH_M: f64 = 1.38;

    fn base(&self) -> &BaseReadings {
        &self.base
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lengths_count as f64 / M_IN_KM / self.base.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg
            * self.base.duration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_swim(action_count: u32) -> Swimming {
        Swimming::new(BaseReadings::new(action_count, 1.0, 80.0), 25.0, 40)
    }

    #[test]
    fn test_reference_swim() {
        let swim = reference_swim(720);

        assert_eq!(format!("{:.3}", swim.distance_km()), "0.994");
        assert_eq!(swim.mean_speed_kmh(), 1.0);
        assert_eq!(swim.calories_kcal(), 336.0);
    }

    #[test]
    fn test_speed_independent_of_strokes() {
        assert_eq!(
            reference_swim(0).mean_speed_kmh(),
            reference_swim(5000).mean_speed_kmh()
        );
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        let swim = reference_swim(1000);
        assert_eq!(swim.distance_km(), 1000.0 * 1.38 / 1000.0);
    }
}
