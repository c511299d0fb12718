use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::error::{FitTrackError, Result};
use crate::packages::BatchResult;

pub mod csv;
pub mod json;
pub mod table;
pub mod text;

/// Output format for batch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary line per workout
    #[default]
    Text,
    Json,
    Csv,
    Table,
}

impl FromStr for OutputFormat {
    type Err = FitTrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(FitTrackError::Configuration(format!(
                "Unsupported output format: {}",
                s
            ))),
        }
    }
}

/// Render a batch in the requested format
pub fn render(batch: &BatchResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(batch)),
        OutputFormat::Json => json::render(batch),
        OutputFormat::Csv => csv::render(batch),
        OutputFormat::Table => Ok(table::render(batch)),
    }
}

/// Render a batch and write it to a file
pub fn export_to_file<P: AsRef<Path>>(
    batch: &BatchResult,
    format: OutputFormat,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let rendered = render(batch, format)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, rendered)?;

    info!(
        "Exported {} results as {:?} to {}",
        batch.results.len(),
        format,
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::{default_packages, process_packages};
    use tempfile::tempdir;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);

        assert!(OutputFormat::from_str("pdf").is_err());
    }

    #[test]
    fn test_export_to_file() {
        let batch = process_packages(&default_packages(), false);
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("reports.txt");

        export_to_file(&batch, OutputFormat::Text, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("Тип тренировки: Swimming;"));
    }
}
