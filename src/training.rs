//! Shared workout calculation contract
//!
//! Every workout kind implements [`Training`]. Distance and mean speed have
//! default formulas driven by the kind's step length; calories are always
//! kind-specific. Each value is computed from the readings on demand, so no
//! method depends on another having been called first.

use tracing::debug;

use crate::error::DomainError;
use crate::models::{BaseReadings, Metrics, RawSample};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Calculation contract shared by all workout kinds
pub trait Training {
    /// Distance covered by one step or stroke, in meters
    const STEP_LENGTH_M: f64;

    fn base(&self) -> &BaseReadings;

    /// Distance in km
    fn distance_km(&self) -> f64 {
        self.base().action_count as f64 * Self::STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours
    }

    /// Estimated energy expenditure in kcal
    fn calories_kcal(&self) -> f64;

    /// Reject readings that would make the formulas divide by zero
    fn validate(&self) -> Result<(), DomainError> {
        check_duration(self.base())
    }

    fn metrics(&self) -> Result<Metrics, DomainError> {
        self.validate()?;

        Ok(Metrics {
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        })
    }
}

/// Duration must be strictly positive; NaN is rejected too
pub fn check_duration(base: &BaseReadings) -> Result<(), DomainError> {
    let duration_hours = base.duration_hours;
    if duration_hours.is_nan() || duration_hours <= 0.0 {
        return Err(DomainError::NonPositiveDuration { duration_hours });
    }
    Ok(())
}

/// Compute derived metrics for a raw tracker sample
pub fn compute(sample: &RawSample) -> Result<Metrics, DomainError> {
    let metrics = match sample {
        RawSample::Running(w) => w.metrics(),
        RawSample::SportsWalking(w) => w.metrics(),
        RawSample::Swimming(w) => w.metrics(),
    }?;

    debug!(
        variant = %sample.variant(),
        distance_km = metrics.distance_km,
        mean_speed_kmh = metrics.mean_speed_kmh,
        calories_kcal = metrics.calories_kcal,
        "Computed workout metrics"
    );

    Ok(metrics)
}
