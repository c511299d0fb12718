//! Map tracker packages to workout samples
//!
//! A package is a three-letter workout code plus the positional values the
//! tracker sent for it, in the order the workout's constructor expects them.

use std::str::FromStr;

use tracing::trace;

use crate::error::DispatchError;
use crate::models::{RawSample, WorkoutVariant};

impl FromStr for WorkoutVariant {
    type Err = DispatchError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutVariant::ALL
            .into_iter()
            .find(|variant| variant.code() == code)
            .ok_or_else(|| DispatchError::UnknownVariant {
                code: code.to_string(),
            })
    }
}

/// Build a sample from a workout code and its positional values
pub fn read_package(code: &str, values: &[f64]) -> Result<RawSample, DispatchError> {
    let variant: WorkoutVariant = code.parse()?;

    if values.len() != variant.arity() {
        return Err(DispatchError::Arity {
            code: variant.code().to_string(),
            expected: variant.arity(),
            actual: values.len(),
        });
    }

    let action_count = to_count("action_count", values[0])?;
    let duration_hours = values[1];
    let weight_kg = values[2];

    let sample = match variant {
        WorkoutVariant::Running => RawSample::running(action_count, duration_hours, weight_kg),
        WorkoutVariant::SportsWalking => {
            RawSample::sports_walking(action_count, duration_hours, weight_kg, values[3])
        }
        WorkoutVariant::Swimming => RawSample::swimming(
            action_count,
            duration_hours,
            weight_kg,
            values[3],
            to_count("pool_lengths_count", values[4])?,
        ),
    };

    trace!(code, ?values, "Read package");
    Ok(sample)
}

/// Parse textual positional values, e.g. from the command line or a CSV row
pub fn parse_values<S: AsRef<str>>(raw: &[S]) -> Result<Vec<f64>, DispatchError> {
    raw.iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.parse::<f64>().map_err(|_| DispatchError::InvalidNumber {
                raw: s.to_string(),
            })
        })
        .collect()
}

fn to_count(field: &str, value: f64) -> Result<u32, DispatchError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(DispatchError::InvalidValue {
            field: field.to_string(),
            value,
        })
    }
}
