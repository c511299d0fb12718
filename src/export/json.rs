use serde::Serialize;

use crate::error::{FitTrackError, Result};
use crate::packages::{BatchResult, PackageOutcome};
use crate::report::Report;

#[derive(Serialize)]
struct JsonEntry<'a> {
    index: usize,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Pretty JSON array, one object per package
pub fn render(batch: &BatchResult) -> Result<String> {
    let entries: Vec<JsonEntry> = batch
        .results
        .iter()
        .map(|r| match &r.outcome {
            PackageOutcome::Processed(report) => JsonEntry {
                index: r.index,
                code: &r.code,
                report: Some(report),
                error: None,
            },
            PackageOutcome::Failed { message } => JsonEntry {
                index: r.index,
                code: &r.code,
                report: None,
                error: Some(message.as_str()),
            },
        })
        .collect();

    serde_json::to_string_pretty(&entries)
        .map_err(|e| FitTrackError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::{process_packages, Package};

    #[test]
    fn test_render_json() {
        let batch = process_packages(
            &[
                Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
                Package::new("WLK", vec![9000.0, 1.0, 75.0]),
            ],
            false,
        );

        let json = render(&batch).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["code"], "SWM");
        assert_eq!(value[0]["report"]["label"], "Swimming");
        assert_eq!(value[0]["report"]["metrics"]["calories_kcal"], 336.0);
        assert!(value[0].get("error").is_none());

        assert_eq!(value[1]["index"], 1);
        assert_eq!(value[1]["error"], "WLK expects 4 values, got 3");
        assert!(value[1].get("report").is_none());
    }
}
