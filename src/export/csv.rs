use csv::Writer;

use crate::error::{FitTrackError, Result};
use crate::packages::{BatchResult, PackageOutcome};

/// CSV with a header row; metric columns are empty for rejected packages
pub fn render(batch: &BatchResult) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record([
        "index",
        "code",
        "type",
        "duration_hours",
        "distance_km",
        "mean_speed_kmh",
        "calories_kcal",
        "error",
    ])?;

    for result in &batch.results {
        let index = result.index.to_string();
        match &result.outcome {
            PackageOutcome::Processed(report) => {
                writer.write_record([
                    index.as_str(),
                    result.code.as_str(),
                    report.label.as_str(),
                    format!("{:.3}", report.duration_hours).as_str(),
                    format!("{:.3}", report.metrics.distance_km).as_str(),
                    format!("{:.3}", report.metrics.mean_speed_kmh).as_str(),
                    format!("{:.3}", report.metrics.calories_kcal).as_str(),
                    "",
                ])?;
            }
            PackageOutcome::Failed { message } => {
                writer.write_record([
                    index.as_str(),
                    result.code.as_str(),
                    "",
                    "",
                    "",
                    "",
                    "",
                    message.as_str(),
                ])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FitTrackError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FitTrackError::Serialization(e.to_string()))
}
