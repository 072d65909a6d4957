//! Diagnostics go to stderr so stdout stays reserved for reports and tool
//! output.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RN_ADVISOR_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";
pub const VERBOSE_DIRECTIVE: &str = "rn_advisor=debug";

/// Filter directive: `RN_ADVISOR_LOG` when set, else the verbose or default level.
pub fn directive(env_value: Option<&str>, verbose: bool) -> String {
    match env_value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.to_string(),
        None if verbose => VERBOSE_DIRECTIVE.to_string(),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = EnvFilter::try_new(directive(env_value.as_deref(), verbose))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
