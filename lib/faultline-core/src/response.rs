//! HTTP response as handed over by the transport.
//!
//! [`Response`] carries the status line, headers and a body. The transport
//! produces a [`RawResponse`], whose body is a stream that can be read only
//! once; see [`crate::materialize`].

use std::collections::HashMap;
use std::io::Read;

use bytes::Bytes;

/// Response whose body is an unread, single-consume byte stream.
pub type RawResponse = Response<Box<dyn Read + Send>>;

/// HTTP response with status, status text, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    status_text: String,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    ///
    /// The status text defaults to the canonical reason phrase of `status`.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        let status_text = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            status_text,
            headers,
            body,
        }
    }

    /// Replace the status text with the one reported by the server.
    #[must_use]
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// HTTP status text (reason phrase).
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the body, e.g. to drain a stream.
    pub const fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx or 5xx.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Transform the body with a function.
    pub fn map_body<F, B2>(self, f: F) -> Response<B2>
    where
        F: FnOnce(B) -> B2,
    {
        Response {
            status: self.status,
            status_text: self.status_text,
            headers: self.headers,
            body: f(self.body),
        }
    }
}

impl Response<Bytes> {
    /// Turn a buffered response back into a readable one.
    ///
    /// Useful to run the checks again on a copy of a response that was
    /// already materialized.
    #[must_use]
    pub fn into_raw(self) -> RawResponse {
        self.map_body(|body| Box::new(std::io::Cursor::new(body)) as Box<dyn Read + Send>)
    }

    /// Get the response body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/xml".to_string());

        let response = Response::new(200, headers, Bytes::from("<action/>"));

        check!(response.status() == 200);
        check!(response.status_text() == "OK");
        check!(response.header("Content-Type") == Some("application/xml"));
        check!(response.is_success());
        check!(!response.is_error());
    }

    #[test]
    fn response_status_text() {
        let response = Response::new(404, HashMap::new(), Bytes::new());
        check!(response.status_text() == "Not Found");
        check!(response.is_error());

        let response = response.with_status_text("404 Not Found");
        check!(response.status_text() == "404 Not Found");

        let response = Response::new(599, HashMap::new(), Bytes::new());
        check!(response.status_text() == "");
    }

    #[test]
    fn response_into_raw() {
        let response = Response::new(200, HashMap::new(), Bytes::from("<fault/>"));
        let mut raw = response.into_raw();

        let mut text = String::new();
        raw.body_mut().read_to_string(&mut text).expect("read");
        check!(text == "<fault/>");
        check!(raw.status() == 200);
    }

    #[test]
    fn response_map_body() {
        let response = Response::new(200, HashMap::new(), Bytes::from("test"));
        let mapped = response.map_body(|b| b.len());

        check!(mapped.status() == 200);
        check!(*mapped.body() == 4);
    }

    #[test]
    fn response_text() {
        let response = Response::new(200, HashMap::new(), Bytes::from("Hello"));
        check!(response.text().expect("text") == "Hello");
    }
}
