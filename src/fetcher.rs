//! Dependency fetch pipeline
//!
//! Coordinates the fetch workflow: test-mode short-circuit → manifest URL
//! construction → HTTP fetch → XML extraction → dedup and sort. The
//! pipeline is pure with respect to the process: it returns typed results
//! and never prints or exits.

use crate::config::Config;
use crate::error::FetchError;
use crate::manifest::{extract_dependencies, manifest_url};
use crate::registry::HttpClient;

/// Fetches a package's direct dependency list from its manifest.
pub struct DependencyFetcher {
    client: HttpClient,
}

impl DependencyFetcher {
    /// Create a fetcher with a default HTTP client.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: HttpClient::new()?,
        })
    }

    /// Create a fetcher with a custom HTTP client (for testing).
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Resolve the manifest URL for the configured package.
    pub fn manifest_url(config: &Config) -> String {
        manifest_url(
            &config.repo_url_or_path,
            &config.package_name,
            &config.package_version,
        )
    }

    /// Fetch the unique, lexicographically sorted dependency list.
    ///
    /// Returns an empty list without touching the network when
    /// `test_repo_mode` is set. Each entry renders as `"<id> <version>"`,
    /// with no trailing space when the version is empty; duplicates are
    /// removed by exact string equality.
    pub fn fetch(&self, config: &Config) -> Result<Vec<String>, FetchError> {
        if config.test_repo_mode {
            return Ok(Vec::new());
        }

        let url = Self::manifest_url(config);
        let body = self.client.get_text(&url)?;
        let entries = extract_dependencies(&body)?;

        let mut rendered: Vec<String> = entries.iter().map(ToString::to_string).collect();
        rendered.sort();
        rendered.dedup();

        Ok(rendered)
    }
}
