/*
[INPUT]:  Endpoint configuration (base URL, API version, testnet, timeout)
[OUTPUT]: Configured client ready for payment API calls
[POS]:    HTTP layer - core client composition
[UPDATE]: When adding construction options or changing the package headers
*/

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::http::request::{Dispatcher, PendingRequest, RequestOptions};
use crate::http::Result;

/// Header identifying the package manager the client was installed with
pub const PACKAGE_MANAGER_HEADER: &str = "X-Package-Manager";

/// Header carrying the API version the client speaks
pub const PACKAGE_VERSION_HEADER: &str = "X-Package-Version";

const PACKAGE_MANAGER: &str = "cargo";

/// Main client for the Coinpush payment API
#[derive(Debug)]
pub struct CoinpushClient {
    config: Config,
    dispatcher: Dispatcher,
}

impl CoinpushClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let dispatcher = Dispatcher::new(config.base_url(), config.timeout())?;
        Ok(Self { config, dispatcher })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Options for an outgoing request: the fixed package headers plus the
    /// caller's form parameters
    pub fn request_options(&self, params: Map<String, Value>) -> RequestOptions {
        RequestOptions::new()
            .header(PACKAGE_MANAGER_HEADER, PACKAGE_MANAGER)
            .header(PACKAGE_VERSION_HEADER, self.config.version().to_string())
            .form_params(params)
    }

    /// Build a GET request for the given resource fragment
    pub(crate) fn get(&self, fragment: &str) -> PendingRequest {
        PendingRequest::new(
            Method::GET,
            self.config.resource_path(fragment),
            self.request_options(Map::new()),
        )
    }

    /// Build a POST request carrying the given form parameters
    pub(crate) fn post(&self, fragment: &str, params: Map<String, Value>) -> PendingRequest {
        PendingRequest::new(
            Method::POST,
            self.config.resource_path(fragment),
            self.request_options(params),
        )
    }

    /// Dispatch a built request and decode its JSON response
    pub(crate) async fn make<T: DeserializeOwned>(&self, request: PendingRequest) -> Result<T> {
        self.dispatcher.make(request).await
    }
}
