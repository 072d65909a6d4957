//! Check whether a newer release of this server is published.
//!
//! The network is consulted at most once per interval (24 hours by default).
//! The last-check time lives behind [`TimestampStore`] and time itself behind
//! [`Clock`], so the gate is testable without disk or network access.

pub(crate) mod client;
pub mod store;


use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use semver::Version;

pub use client::GitHubReleases;
pub use store::{FileTimestampStore, MemoryTimestampStore, SystemClock};

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where the latest published version comes from.
pub trait ReleaseSource {
    /// Latest version tag, e.g. `v1.4.0`.
    fn latest_version(&self) -> Result<String>;
}

/// Single-slot store for the time of the last successful check.
pub trait TimestampStore {
    fn last_checked(&self) -> Result<Option<DateTime<Utc>>>;
    fn record(&self, at: DateTime<Utc>) -> Result<()>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Checked recently; the network was not consulted.
    Skipped {
        last_checked: DateTime<Utc>,
        next_check: DateTime<Utc>,
    },
    UpToDate { current: String },
    Available { current: String, latest: String },
}

pub struct UpdateChecker {
    source: Box<dyn ReleaseSource + Send + Sync>,
    store: Box<dyn TimestampStore + Send + Sync>,
    clock: Box<dyn Clock + Send + Sync>,
    current_version: String,
    interval: Duration,
}

impl UpdateChecker {
    pub fn new(
        source: impl ReleaseSource + Send + Sync + 'static,
        store: impl TimestampStore + Send + Sync + 'static,
        clock: impl Clock + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            store: Box::new(store),
            clock: Box::new(clock),
            current_version: CURRENT_VERSION.to_string(),
            interval: Duration::hours(crate::models::constants::UPDATE_CHECK_INTERVAL_HOURS),
        }
    }

    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = version.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run the check. Unless `force` is set, a check within the interval is
    /// skipped. The timestamp is recorded only after a successful fetch.
    pub fn check(&self, force: bool) -> Result<UpdateStatus> {
        let now = self.clock.now();

        if !force {
            if let Some(last) = self.store.last_checked()? {
                if now - last < self.interval {
                    tracing::debug!(%last, "update check skipped");
                    return Ok(UpdateStatus::Skipped {
                        last_checked: last,
                        next_check: last + self.interval,
                    });
                }
            }
        }

        let latest = self.source.latest_version()?;
        self.store.record(now)?;

        let status = if is_newer(&latest, &self.current_version) {
            UpdateStatus::Available {
                current: self.current_version.clone(),
                latest,
            }
        } else {
            UpdateStatus::UpToDate {
                current: self.current_version.clone(),
            }
        };
        tracing::debug!(?status, "update check complete");
        Ok(status)
    }
}

/// Semver comparison after stripping a leading `v`; when either side is not
/// valid semver, any difference counts as newer.
pub fn is_newer(latest: &str, current: &str) -> bool {
    let parse = |raw: &str| Version::parse(raw.trim().trim_start_matches('v'));
    match (parse(latest), parse(current)) {
        (Ok(latest), Ok(current)) => latest > current,
        _ => latest.trim() != current.trim(),
    }
}

pub fn format_status(status: &UpdateStatus) -> String {
    match status {
        UpdateStatus::Skipped {
            last_checked,
            next_check,
        } => format!(
            "Update check skipped: last checked {}. Next check after {}. Pass force=true to check now.",
            last_checked.format("%Y-%m-%d %H:%M UTC"),
            next_check.format("%Y-%m-%d %H:%M UTC")
        ),
        UpdateStatus::UpToDate { current } => {
            format!("You're running the latest version ({current}).")
        }
        UpdateStatus::Available { current, latest } => {
            format!("New version available: {current} -> {latest}.")
        }
    }
}
