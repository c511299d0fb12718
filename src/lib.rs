// Library interface for FitTrack modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod packages;
pub mod report;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use models::*;
pub use training::{compute, Training};
pub use report::{format, Report};
pub use dispatch::{parse_values, read_package};
pub use packages::{
    default_packages, load_packages_csv, process_package, process_packages, BatchResult, Package,
    PackageOutcome, PackageResult,
};
pub use export::{render, OutputFormat};
pub use error::{DispatchError, DomainError, FitTrackError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
