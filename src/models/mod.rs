pub mod category;
pub mod constants;
pub mod finding;
pub mod manifest;
pub mod report;
pub mod severity;
pub mod target;

pub use category::Category;
pub use finding::Finding;
pub use manifest::PackageManifest;
pub use report::AnalysisReport;
pub use severity::Severity;
pub use target::ScanTarget;
