//! End-to-end tests: scans over real temporary project trees, driven through
//! the public analyzer, report and tool APIs.

pub mod helpers;
pub mod report;
pub mod scan;
pub mod tools;

pub use helpers::*;
