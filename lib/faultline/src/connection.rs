//! Transport seam and its blocking HTTP implementation.

use std::io::Read;

use bytes::Bytes;
use derive_more::Debug;
use faultline_core::{Error, RawResponse, Response, Result};
use tracing::debug;
use url::Url;

use crate::ConnectionConfig;

/// Transport used by services to reach the remote API.
///
/// Implementations must hand back every HTTP response, error statuses
/// included, with the body left unread. Only failures to obtain a response
/// at all are errors.
///
/// Implement this trait to plug in another HTTP stack or a mock for tests.
pub trait Connection: Send + Sync {
    /// Base URL every service path is resolved against.
    fn base_url(&self) -> &Url;

    /// Send a request and return the response with its body unread.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained (network, TLS,
    /// timeout, invalid request).
    fn send(&self, request: http::Request<Bytes>) -> Result<RawResponse>;
}

/// Blocking [`Connection`] backed by `ureq`.
#[derive(Debug, Clone)]
pub struct UreqConnection {
    base_url: Url,
    #[debug(skip)]
    agent: ureq::Agent,
}

impl UreqConnection {
    /// Create a connection with the default configuration.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_config(base_url, &ConnectionConfig::default())
    }

    /// Create a connection with a custom configuration.
    #[must_use]
    pub fn with_config(base_url: Url, config: &ConnectionConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .timeout_connect(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { base_url, agent }
    }
}

impl Connection for UreqConnection {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn send(&self, request: http::Request<Bytes>) -> Result<RawResponse> {
        let (parts, body) = request.into_parts();
        let url = parts.uri.to_string();

        let mut req = self.agent.request(parts.method.as_str(), &url);
        for (name, value) in &parts.headers {
            let value = value
                .to_str()
                .map_err(|e| Error::invalid_request(format!("header {name}: {e}")))?;
            req = req.set(name.as_str(), value);
        }

        debug!(method = %parts.method, url = %url, "sending request");
        let result = if body.is_empty() {
            req.call()
        } else {
            req.send_bytes(&body)
        };

        let response = match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => return Err(Error::connection(err.to_string())),
        };
        debug!(status = response.status(), "received response");

        Ok(into_raw_response(response))
    }
}

fn into_raw_response(response: ureq::Response) -> RawResponse {
    let headers = response
        .headers_names()
        .into_iter()
        .filter_map(|name| {
            let value = response.header(&name)?.to_string();
            Some((name, value))
        })
        .collect();
    let status = response.status();
    let status_text = response.status_text().to_string();
    let body: Box<dyn Read + Send> = response.into_reader();

    Response::new(status, headers, body).with_status_text(status_text)
}
