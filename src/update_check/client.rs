//! HTTP access to the GitHub releases API.

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use super::ReleaseSource;

pub(crate) const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
pub(crate) const HTTP_REQUEST_TIMEOUT_SECS: u64 = 15;
pub(crate) const USER_AGENT: &str = concat!("rn-advisor/", env!("CARGO_PKG_VERSION"));

/// HTTP client with connect and total-request timeouts, so a stalled API
/// never blocks a tool call indefinitely.
pub(crate) fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")
}

pub(crate) fn validate_response_status(response: &Response, context: &str) -> Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        bail!(
            "{}: HTTP {} - {}",
            context,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        );
    }
    Ok(())
}

#[derive(Deserialize)]
struct Release {
    tag_name: String,
}

/// Latest published release of a GitHub repository.
#[derive(Debug, Clone)]
pub struct GitHubReleases {
    repo: String,
}

impl GitHubReleases {
    /// `repo` is `owner/name`.
    pub fn new(repo: impl Into<String>) -> Self {
        Self { repo: repo.into() }
    }

    pub fn url(&self) -> String {
        format!("https://api.github.com/repos/{}/releases/latest", self.repo)
    }
}

impl ReleaseSource for GitHubReleases {
    fn latest_version(&self) -> Result<String> {
        let client = create_http_client()?;
        let response = client
            .get(self.url())
            .header("Accept", "application/vnd.github+json")
            .send()
            .context("Failed to check for updates")?;

        validate_response_status(&response, "Failed to fetch release info")?;

        let release: Release = response.json().context("Failed to parse release info")?;
        Ok(release.tag_name)
    }
}
