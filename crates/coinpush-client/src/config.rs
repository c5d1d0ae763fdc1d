/*
[INPUT]:  Endpoint selection (base URL, API version, testnet flag, timeout)
[OUTPUT]: Validated request policy and version-qualified resource paths
[POS]:    Config layer - endpoint and versioning policy for a client instance
[UPDATE]: When supported API versions or gateway hosts change
*/

use std::time::Duration;

use crate::http::{CoinpushError, Result};

/// Base URL of the production gateway
pub const MAINNET_BASE_URL: &str = "https://coinpush.io";

/// Base URL selected by `enable_dev_mode`
pub const DEV_BASE_URL: &str = "http://coinpush.test";

/// Supported API versions and their URL path segments
const VERSIONS: &[(u32, &str)] = &[(1, "api")];

const DEFAULT_VERSION: u32 = 1;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoint and versioning policy for a client instance.
///
/// Holds the base URL, the selected API version, the testnet flag, and the
/// request timeout. Setters chain through `&mut Self`; only `use_version`
/// can fail, and a failed call leaves the selection untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    version: u32,
    base_url: String,
    timeout: Duration,
    testnet: bool,
}

impl Config {
    /// Create a config with production defaults
    pub fn new() -> Self {
        Self {
            version: DEFAULT_VERSION,
            base_url: MAINNET_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            testnet: false,
        }
    }

    /// Create a config pointed at a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.set_base_url(base_url);
        config
    }

    /// Select the given API version if it is supported.
    ///
    /// Unsupported versions fail with `UnsupportedVersion` without touching
    /// the current selection.
    pub fn use_version(&mut self, version: u32) -> Result<&mut Self> {
        if version_segment(version).is_none() {
            return Err(CoinpushError::UnsupportedVersion { version });
        }
        self.version = version;
        Ok(self)
    }

    /// Route requests through the testnet namespace
    pub fn use_testnet(&mut self) -> &mut Self {
        self.testnet = true;
        self
    }

    /// Route requests through the mainnet namespace
    pub fn use_mainnet(&mut self) -> &mut Self {
        self.testnet = false;
        self
    }

    /// Point the client at the local development host
    pub fn enable_dev_mode(&mut self) -> &mut Self {
        self.set_base_url(DEV_BASE_URL);
        self
    }

    /// Overwrite the base URL
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Overwrite the request timeout
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Whether the testnet namespace is selected
    pub fn is_using_testnet(&self) -> bool {
        self.testnet
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The selected API version number
    pub fn version(&self) -> u32 {
        self.version
    }

    /// URL path segment of the selected API version
    pub fn version_path_segment(&self) -> &'static str {
        version_segment(self.version)
            .expect("selected version always has an entry in the version table")
    }

    /// Resolve a resource fragment into the full request path.
    ///
    /// Single source of truth for URL shape: leading and trailing slashes
    /// are trimmed from the fragment, then the version segment (and the
    /// `testnet` segment when enabled) is prepended.
    pub fn resource_path(&self, fragment: &str) -> String {
        let fragment = fragment.trim_matches('/');
        let segment = self.version_path_segment();
        if self.testnet {
            format!("/{segment}/testnet/{fragment}")
        } else {
            format!("/{segment}/{fragment}")
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn version_segment(version: u32) -> Option<&'static str> {
    VERSIONS
        .iter()
        .find(|(candidate, _)| *candidate == version)
        .map(|(_, segment)| *segment)
}
