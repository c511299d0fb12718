//! Human-readable workout summary

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::models::{Metrics, RawSample};
use crate::training::compute;

/// Computed workout ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Workout type label, e.g. `Running`
    pub label: String,

    /// Session length in hours
    pub duration_hours: f64,

    pub metrics: Metrics,
}

impl Report {
    pub fn new(label: impl Into<String>, duration_hours: f64, metrics: Metrics) -> Self {
        Self {
            label: label.into(),
            duration_hours,
            metrics,
        }
    }

    /// Compute metrics for a sample and wrap them with its label
    pub fn from_sample(sample: &RawSample) -> Result<Self, DomainError> {
        let metrics = compute(sample)?;
        Ok(Self::new(
            sample.variant().label(),
            sample.base().duration_hours,
            metrics,
        ))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.label,
            self.duration_hours,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories_kcal,
        )
    }
}

/// Render a report as its fixed one-line summary
pub fn format(report: &Report) -> String {
    report.to_string()
}
