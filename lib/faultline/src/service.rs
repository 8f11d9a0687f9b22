//! Services: a connection plus a path on the remote API.
//!
//! ```ignore
//! use std::sync::Arc;
//! use faultline::{Action, BaseService, UreqConnection};
//!
//! let connection = Arc::new(UreqConnection::new("https://engine.example.com/api".parse()?));
//! let vm = BaseService::new(connection, "vms/123");
//!
//! vm.invoke("start", &Action::new())?;
//! vm.remove()?;
//! ```

use std::sync::Arc;

use bytes::Bytes;
use derive_more::Debug;
use faultline_core::{
    ACTION_ROOT, Action, Error, RawResponse, Result, check_action, check_fault, xml,
};
use http::Method;
use tracing::{Level, debug, span, warn};
use url::Url;

use crate::Connection;

const XML_CONTENT_TYPE: &str = "application/xml";

/// Common accessors of every service.
pub trait Service {
    /// Connection used to reach the remote API.
    fn connection(&self) -> &dyn Connection;

    /// Path of the service, relative to the connection base URL.
    fn path(&self) -> &str;
}

/// Service addressed by a path, running the response checks on each call.
#[derive(Debug, Clone)]
pub struct BaseService {
    #[debug(skip)]
    connection: Arc<dyn Connection>,
    path: String,
}

impl BaseService {
    /// Create a service at `path`.
    pub fn new(connection: Arc<dyn Connection>, path: impl Into<String>) -> Self {
        Self {
            connection,
            path: path.into(),
        }
    }

    /// Child service at `path/segment`, sharing the same connection.
    #[must_use]
    pub fn service(&self, segment: &str) -> Self {
        Self {
            connection: Arc::clone(&self.connection),
            path: join_path(&self.path, segment),
        }
    }

    /// Delete the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports a fault.
    pub fn remove(&self) -> Result<()> {
        let span = span!(Level::INFO, "remove", path = %self.path);
        let _entered = span.enter();

        let mut response = self.send(Method::DELETE, &self.path, Bytes::new())?;
        log_fault(check_fault(&mut response))
    }

    /// Invoke the operation `method` with `action` as input.
    ///
    /// Returns the action sent back by the server, or `None` when the
    /// response body is not an action document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a fault
    /// (top level or embedded in the returned action), or the response is
    /// malformed.
    pub fn invoke(&self, method: &str, action: &Action) -> Result<Option<Action>> {
        let span = span!(Level::INFO, "invoke", path = %self.path, method);
        let _entered = span.enter();

        let body = xml::encode(action, ACTION_ROOT)?;
        let mut response = self.send(Method::POST, &join_path(&self.path, method), body)?;
        log_fault(check_action(&mut response))
    }

    fn send(&self, method: Method, path: &str, body: Bytes) -> Result<RawResponse> {
        let url = resolve(self.connection.base_url(), path)?;

        let mut builder = http::Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .header(http::header::ACCEPT, XML_CONTENT_TYPE);
        if !body.is_empty() {
            builder = builder.header(http::header::CONTENT_TYPE, XML_CONTENT_TYPE);
        }
        let request = builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))?;

        debug!(%method, %url, "calling service");
        let response = self.connection.send(request)?;
        debug!(
            status = response.status(),
            status_text = response.status_text(),
            "service responded"
        );
        Ok(response)
    }
}

impl Service for BaseService {
    fn connection(&self) -> &dyn Connection {
        self.connection.as_ref()
    }

    fn path(&self) -> &str {
        &self.path
    }
}

fn log_fault<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        if err.is_remote() {
            warn!(status = ?err.status(), error = %err, "remote fault");
        } else {
            warn!(error = %err, "call failed");
        }
    }
    result
}

fn join_path(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_start_matches('/');
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{base}/{segment}")
    }
}

fn resolve(base_url: &Url, path: &str) -> Result<Url> {
    Ok(Url::parse(&join_path(base_url.as_str(), path))?)
}
