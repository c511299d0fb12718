//! Sports walking calculations
//!
//! Calorie burn depends on the square of speed (converted to m/s) relative to
//! the walker's height, so height is required and must be positive.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::models::BaseReadings;
use crate::training::{check_duration, Training, MIN_IN_H};

/// Sports walking session readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub base: BaseReadings,

    /// Walker height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s, rounded as in the published formula
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(base: BaseReadings, height_cm: f64) -> Self {
        Self { base, height_cm }
    }
}

impl Training for SportsWalking {
    const STEP_LENGTH_M: f64 = 0.65;

    fn base(&self) -> &BaseReadings {
        &self.base
    }

    fn calories_kcal(&self) -> f64 {
        let weight_kg = self.base.weight_kg;

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight_kg
            + (self.mean_speed_kmh() * Self::KMH_IN_MSEC).powi(2)
                / (self.height_cm / Self::CM_IN_M)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight_kg)
            * self.base.duration_hours
            * MIN_IN_H
    }

    fn validate(&self) -> Result<(), DomainError> {
        check_duration(&self.base)?;
        if self.height_cm.is_nan() || self.height_cm <= 0.0 {
            return Err(DomainError::NonPositiveHeight {
                height_cm: self.height_cm,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_walk() -> SportsWalking {
        SportsWalking::new(BaseReadings::new(9000, 1.0, 75.0), 180.0)
    }

    #[test]
    fn test_reference_walk() {
        let walk = reference_walk();

        assert_eq!(walk.distance_km(), 5.85);
        assert_eq!(walk.mean_speed_kmh(), 5.85);
        assert_eq!(format!("{:.3}", walk.calories_kcal()), "349.252");
    }

    #[test]
    fn test_zero_height_rejected() {
        let walk = SportsWalking::new(BaseReadings::new(9000, 1.0, 75.0), 0.0);
        assert_eq!(
            walk.metrics(),
            Err(DomainError::NonPositiveHeight { height_cm: 0.0 })
        );
    }

    #[test]
    fn test_negative_height_rejected() {
        let walk = SportsWalking::new(BaseReadings::new(9000, 1.0, 75.0), -170.0);
        assert!(matches!(
            walk.metrics(),
            Err(DomainError::NonPositiveHeight { .. })
        ));
    }

    #[test]
    fn test_duration_checked_before_height() {
        let walk = SportsWalking::new(BaseReadings::new(9000, 0.0, 75.0), 0.0);
        assert!(matches!(
            walk.metrics(),
            Err(DomainError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn test_taller_walker_burns_less_at_same_speed() {
        let short = SportsWalking::new(BaseReadings::new(9000, 1.0, 75.0), 160.0);
        let tall = SportsWalking::new(BaseReadings::new(9000, 1.0, 75.0), 200.0);
        assert!(short.calories_kcal() > tall.calories_kcal());
    }
}
