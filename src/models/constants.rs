/// Directory names never descended into during a scan.
pub const EXCLUDED_DIRS: [&str; 7] = [
    "node_modules",
    ".git",
    "ios",
    "android",
    ".expo",
    "dist",
    "build",
];

/// Source file extensions eligible for analysis (case-sensitive).
pub const SOURCE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// File name markers identifying test files.
pub const TEST_FILE_MARKERS: [&str; 2] = [".test.", ".spec."];

/// Function bodies longer than this many lines are reported.
pub const MAX_FUNCTION_LINES: usize = 50;

/// Effect blocks longer than this many lines are reported.
pub const MAX_EFFECT_LINES: usize = 20;

/// Props interfaces with more members than this are reported.
pub const MAX_PROPS_MEMBERS: usize = 10;

/// More than this many bare multi-digit literals counts as magic numbers.
pub const MAX_MAGIC_NUMBERS: usize = 3;

/// More than this many inline prop functions in one file is reported.
pub const MAX_INLINE_PROP_FUNCTIONS: usize = 8;

/// Lowest React Native major version (as parsed from the manifest) not flagged.
pub const REACT_NATIVE_VERSION_FLOOR: u64 = 70;

/// Name of the project manifest read by the upgrade checker.
pub const MANIFEST_FILE: &str = "package.json";

/// Minimum interval between two automatic update checks.
pub const UPDATE_CHECK_INTERVAL_HOURS: i64 = 24;
