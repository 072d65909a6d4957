pub mod analyzer;
pub mod config;
pub mod fs;
pub mod logging;
pub mod models;
pub mod report;
pub mod rules;
pub mod scan;
pub mod testgen;
pub mod tools;
pub mod update_check;
pub mod upgrades;
pub mod utils;

pub use analyzer::{analyze_codebase, analyze_source, AnalysisOptions};
pub use models::{AnalysisReport, Category, Finding, Severity};
