//! Tracker packages: built-in samples, CSV loading and batch processing

use csv::{ReaderBuilder, Trim};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::dispatch::{parse_values, read_package};
use crate::error::{DispatchError, ErrorSeverity, Result};
use crate::report::Report;

/// Workout code plus the positional values the tracker sent
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,

    /// Positional values, or the reason the raw text was not numeric
    pub values: std::result::Result<Vec<f64>, DispatchError>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values: Ok(values),
        }
    }

    /// Package from textual values; a parse failure stays with the package
    pub fn from_text<S: AsRef<str>>(code: impl Into<String>, raw: &[S]) -> Self {
        Self {
            code: code.into(),
            values: parse_values(raw),
        }
    }
}

/// Sample packages shipped with the tool
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load packages from a headerless CSV file, one `CODE,v1,v2,...` per row
pub fn load_packages_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Package>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_path(path)?;

    let mut packages = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let Some(code) = fields.next().filter(|c| !c.is_empty()) else {
            continue;
        };
        let raw: Vec<&str> = fields.collect();
        packages.push(Package::from_text(code, raw.as_slice()));
    }

    info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Turn one package into a report
pub fn process_package(package: &Package) -> Result<Report> {
    let values = package.values.as_ref().map_err(Clone::clone)?;
    let sample = read_package(&package.code, values)?;
    Ok(Report::from_sample(&sample)?)
}

/// Result of processing a single package in a batch
#[derive(Debug, Clone, PartialEq)]
pub enum PackageOutcome {
    Processed(Report),
    Failed { message: String },
}

/// Package together with what came of it
#[derive(Debug, Clone, PartialEq)]
pub struct PackageResult {
    /// Position of the package in its batch
    pub index: usize,
    pub code: String,
    pub outcome: PackageOutcome,
}

impl PackageResult {
    pub fn report(&self) -> Option<&Report> {
        match &self.outcome {
            PackageOutcome::Processed(report) => Some(report),
            PackageOutcome::Failed { .. } => None,
        }
    }
}

/// Outcome of a batch, in input order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchResult {
    pub results: Vec<PackageResult>,
}

impl BatchResult {
    pub fn processed_count(&self) -> usize {
        self.results.iter().filter(|r| r.report().is_some()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.processed_count()
    }

    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.processed_count() == 0
    }
}

/// Process every package; a failing package never affects the others
pub fn process_packages(packages: &[Package], parallel: bool) -> BatchResult {
    let process = |(index, package): (usize, &Package)| {
        let outcome = match process_package(package) {
            Ok(report) => PackageOutcome::Processed(report),
            Err(e) => {
                match e.severity() {
                    ErrorSeverity::Warning => {
                        warn!(index, code = %package.code, "incorrect package: {}", e)
                    }
                    ErrorSeverity::Error => {
                        error!(index, code = %package.code, "package failed: {}", e)
                    }
                }
                PackageOutcome::Failed {
                    message: e.user_message(),
                }
            }
        };
        PackageResult {
            index,
            code: package.code.clone(),
            outcome,
        }
    };

    let results: Vec<PackageResult> = if parallel {
        packages.par_iter().enumerate().map(process).collect()
    } else {
        packages.iter().enumerate().map(process).collect()
    };

    let batch = BatchResult { results };
    debug!(
        processed = batch.processed_count(),
        failed = batch.failed_count(),
        parallel,
        "Batch complete"
    );
    batch
}
