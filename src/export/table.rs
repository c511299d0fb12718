use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::packages::{BatchResult, PackageOutcome};

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Type")]
    label: String,
    #[tabled(rename = "Hours")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories (kcal)")]
    calories: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Terminal table of the batch
pub fn render(batch: &BatchResult) -> String {
    let rows = batch.results.iter().map(|result| match &result.outcome {
        PackageOutcome::Processed(report) => Row {
            index: result.index,
            code: result.code.clone(),
            label: report.label.clone(),
            duration: format!("{:.3}", report.duration_hours),
            distance: format!("{:.3}", report.metrics.distance_km),
            speed: format!("{:.3}", report.metrics.mean_speed_kmh),
            calories: format!("{:.3}", report.metrics.calories_kcal),
            status: "ok".to_string(),
        },
        PackageOutcome::Failed { message } => Row {
            index: result.index,
            code: result.code.clone(),
            label: "-".to_string(),
            duration: "-".to_string(),
            distance: "-".to_string(),
            speed: "-".to_string(),
            calories: "-".to_string(),
            status: message.clone(),
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
