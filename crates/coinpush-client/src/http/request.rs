/*
[INPUT]:  Pending requests (method, path, headers, form parameters)
[OUTPUT]: Decoded JSON responses or normalized request errors
[POS]:    HTTP layer - request dispatch and error normalization core
[UPDATE]: When the wire contract or the normalization rules change
*/

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::http::{RequestError, Result};

/// Key under which a non-JSON-object error body is preserved verbatim
pub const RAW_BODY_KEY: &str = "contents";

/// Outgoing headers plus form parameters for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub form_params: Map<String, Value>,
}

impl RequestOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, replacing an earlier one with the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(existing, _)| *existing != name);
        self.headers.push((name, value.into()));
        self
    }

    /// Replace the form parameters wholesale
    pub fn form_params(mut self, params: Map<String, Value>) -> Self {
        self.form_params = params;
        self
    }

    /// Merge another option set into this one, last write winning per
    /// header name and per form key
    pub fn merge(mut self, other: RequestOptions) -> Self {
        for (name, value) in other.headers {
            self = self.header(name, value);
        }
        for (key, value) in other.form_params {
            self.form_params.insert(key, value);
        }
        self
    }
}

/// A single request ready for dispatch.
///
/// Carries the verb, the version/testnet-qualified path, and the options.
/// Built fresh per call and consumed exactly once by [`Dispatcher::make`].
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub method: Method,
    pub path: String,
    pub options: RequestOptions,
}

impl PendingRequest {
    pub fn new(method: Method, path: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            method,
            path: path.into(),
            options,
        }
    }
}

/// Issues HTTP calls and normalizes their outcome.
///
/// The transport is bound to the base URL and timeout at construction time.
/// Every wire-level failure, whether an error status or a fault that never
/// produced a response, surfaces as a [`RequestError`]; nothing else is
/// caught here.
#[derive(Debug)]
pub struct Dispatcher {
    http_client: Client,
    base_url: Url,
}

impl Dispatcher {
    /// Build a dispatcher bound to the given base URL and timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// The base URL request paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Dispatch the request and decode the JSON response.
    ///
    /// Success bodies decode into `T`; callers that want the raw server
    /// shape use `serde_json::Value`. An error status unpacks into a
    /// [`RequestError`] carrying the status code and a best-effort parse of
    /// the body; a fault with no response at all carries status code 0 and
    /// an empty body map. A success body that fails to decode propagates as
    /// a serialization error instead of a normalized one.
    pub async fn make<T: DeserializeOwned>(&self, request: PendingRequest) -> Result<T> {
        let url = self.base_url.join(&request.path)?;
        debug!(method = %request.method, path = %request.path, "dispatching request");

        let mut builder = self.http_client.request(request.method, url);
        for (name, value) in &request.options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.options.form_params.is_empty() {
            builder = builder.form(&request.options.form_params);
        }

        let response = builder.send().await.map_err(RequestError::from_transport)?;
        let status = response.status();
        let http_error = response.error_for_status_ref().err();
        let body = response.text().await.map_err(RequestError::from_transport)?;
        debug!(%status, body_len = body.len(), "request completed");

        match http_error {
            None => Ok(serde_json::from_str(&body)?),
            Some(source) => Err(RequestError {
                message: source.to_string(),
                status_code: status.as_u16(),
                response: unpack_error_body(&body),
                source: Some(source),
            }
            .into()),
        }
    }
}

/// Best-effort decode of an error body into a JSON object map.
///
/// A body that decodes to something other than a JSON object, or does not
/// decode at all, is preserved verbatim under [`RAW_BODY_KEY`]; an empty
/// body yields an empty map.
fn unpack_error_body(body: &str) -> Map<String, Value> {
    if body.is_empty() {
        return Map::new();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => {
            let mut map = Map::new();
            map.insert(RAW_BODY_KEY.to_string(), Value::String(body.to_string()));
            map
        }
    }
}
