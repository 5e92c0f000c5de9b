//! # Mock Data Exporter
//!
//! Renders generated mock datasets into downloadable formats.
//!
//! ## Features
//!
//! - Load datasets produced by the generation step (`{"fields", "data"}`)
//! - Export to JSON, CSV, Markdown tables and SQL insert scripts
//! - Validate generation requests (scenario text and row count)
//!
//! ## Example
//!
//! ```no_run
//! use mockdata_exporter::export::ExportFormat;
//! use mockdata_exporter::model::Dataset;
//!
//! let dataset = Dataset::from_file("users.json").expect("Failed to load");
//! let sql = ExportFormat::Sql.render(&dataset, "users").expect("Failed to export");
//! println!("{}", String::from_utf8_lossy(&sql));
//! ```

pub mod error;
pub mod export;
pub mod model;
