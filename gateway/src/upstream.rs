// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Access to the server that sits behind the gateway.

use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, StatusCode};
use log::warn;
use reqwest::Client;
use serde::Serialize;
use shareit_core::driver::{DriverError, DriverResult};
use shareit_core::env::{get_optional_var, get_required_var};
use shareit_core::rest::SHARER_USER_ID_HEADER;
use std::time::Duration;
use url::Url;

/// Default timeout for calls to the server.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A request to forward to the server.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct UpstreamRequest {
    /// HTTP method of the request.
    pub(crate) method: Method,

    /// Absolute path of the API, such as `/items/3`.
    pub(crate) path: String,

    /// Already-encoded query string, without the leading `?`.
    pub(crate) query: Option<String>,

    /// Identity of the caller to pass along in the `X-Sharer-User-Id` header.
    pub(crate) caller: Option<i32>,

    /// JSON payload of the request.
    pub(crate) body: Option<serde_json::Value>,
}

impl UpstreamRequest {
    /// Creates a new request for `method` on `path` with no query, caller nor body.
    pub(crate) fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Self { method, path: path.into(), query: None, caller: None, body: None }
    }

    /// Attaches the identity of the `caller` to the request.
    pub(crate) fn with_caller(mut self, caller: i32) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attaches a query string built from `query` to the request.
    pub(crate) fn with_query<Q: Serialize>(mut self, query: &Q) -> DriverResult<Self> {
        let query = serde_urlencoded::to_string(query)
            .map_err(|e| DriverError::BackendError(format!("Cannot encode query: {}", e)))?;
        self.query = if query.is_empty() { None } else { Some(query) };
        Ok(self)
    }

    /// Attaches `body` as the JSON payload of the request.
    pub(crate) fn with_json<B: Serialize>(mut self, body: &B) -> DriverResult<Self> {
        let body = serde_json::to_value(body)
            .map_err(|e| DriverError::BackendError(format!("Cannot encode payload: {}", e)))?;
        self.body = Some(body);
        Ok(self)
    }
}

/// A response received from the server.
#[derive(Debug, PartialEq)]
pub(crate) struct UpstreamResponse {
    /// Status code returned by the server.
    pub(crate) status: StatusCode,

    /// Content type of the body, if the server provided one.
    pub(crate) content_type: Option<HeaderValue>,

    /// Raw body of the response.
    pub(crate) body: Bytes,
}

/// Abstraction over the transport used to reach the server.
#[async_trait]
pub(crate) trait Upstream {
    /// Sends `request` to the server and returns its response, whatever its status is.
    ///
    /// Errors are reserved for failures to talk to the server.
    async fn forward(&self, request: UpstreamRequest) -> DriverResult<UpstreamResponse>;
}

/// Options to configure an `HttpUpstream`.
#[derive(Debug, PartialEq)]
pub struct HttpUpstreamOptions {
    /// Base URL of the server.
    pub server_url: Url,

    /// Maximum time to wait for each call to the server.
    pub timeout: Duration,
}

impl HttpUpstreamOptions {
    /// Creates a set of options from environment variables whose name is prefixed with the given
    /// `prefix`.
    ///
    /// This will use variables such as `<prefix>_SERVER_URL` and `<prefix>_TIMEOUT_SECS`.
    pub fn from_env(prefix: &str) -> Result<Self, String> {
        Ok(Self {
            server_url: get_required_var::<Url>(prefix, "SERVER_URL")?,
            timeout: Duration::from_secs(
                get_optional_var::<u64>(prefix, "TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }
}

/// Converts a `reqwest::Error` to a `DriverError`.
fn reqwest_error_to_driver_error(e: reqwest::Error) -> DriverError {
    warn!("Call to the server failed: {}", e);
    DriverError::BackendError(format!("Cannot reach the server: {}", e))
}

/// Upstream that talks to the server over HTTP.
#[derive(Clone)]
pub(crate) struct HttpUpstream {
    /// Asynchronous HTTP client with which to issue the server requests.
    client: Client,

    /// Base URL of the server, always ending in a slash.
    base_url: Url,
}

impl HttpUpstream {
    /// Creates a new HTTP upstream using `opts` for configuration.
    pub(crate) fn new(opts: HttpUpstreamOptions) -> DriverResult<Self> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(|e| DriverError::BackendError(format!("Cannot create HTTP client: {}", e)))?;

        let mut base_url = opts.server_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    /// Computes the URL to reach `path` with an optional `query`.
    fn url(&self, path: &str, query: Option<&str>) -> DriverResult<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/')).map_err(|e| {
            DriverError::BackendError(format!("Invalid path {} for the server: {}", path, e))
        })?;
        url.set_query(query);
        Ok(url)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn forward(&self, request: UpstreamRequest) -> DriverResult<UpstreamResponse> {
        let url = self.url(&request.path, request.query.as_deref())?;

        let mut builder = self.client.request(request.method, url);
        if let Some(caller) = request.caller {
            builder = builder.header(SHARER_USER_ID_HEADER, caller.to_string());
        }
        if let Some(body) = request.body {
            let body = serde_json::to_vec(&body)
                .map_err(|e| DriverError::BackendError(format!("Cannot encode payload: {}", e)))?;
            builder = builder.header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref()).body(body);
        }

        let response = builder.send().await.map_err(reqwest_error_to_driver_error)?;
        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(reqwest_error_to_driver_error)?;
        Ok(UpstreamResponse { status, content_type, body })
    }
}
