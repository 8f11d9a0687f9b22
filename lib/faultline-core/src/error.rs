//! Error types for faultline.

use derive_more::{Display, Error, From};

use crate::Fault;

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for faultline operations.
///
/// A document whose root element is not the expected one is never an
/// error: that outcome lives in [`crate::Decoded::ShapeMismatch`] only.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The response body could not be read to the end.
    #[display("failed to read response, reason: {_0}")]
    #[from]
    Io(std::io::Error),

    /// The root element matched but the document content is malformed.
    #[display("XML deserialization error at '{path}': {message}")]
    #[from(skip)]
    XmlDeserialization {
        /// Element path to the error (e.g., "action.fault.reason").
        path: String,
        /// Error message.
        message: String,
    },

    /// A request document could not be encoded.
    #[display("XML serialization error: {_0}")]
    #[from(skip)]
    XmlSerialization(#[error(not(source))] String),

    /// The server reported a fault, or answered with an error status.
    ///
    /// The display form is the composed message, see [`crate::compose_error`].
    #[display("{message}")]
    #[from(skip)]
    Remote {
        /// Composed, human readable message.
        message: String,
        /// HTTP status code of the response, if one was supplied.
        status: Option<u16>,
        /// The fault reported by the server, if any.
        fault: Option<Fault>,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an XML deserialization error with path context.
    #[must_use]
    pub fn xml_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::XmlDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an XML serialization error.
    #[must_use]
    pub fn xml_serialization(message: impl Into<String>) -> Self {
        Self::XmlSerialization(message.into())
    }

    /// Create a remote error from an already composed message.
    #[must_use]
    pub fn remote(message: impl Into<String>, status: Option<u16>, fault: Option<Fault>) -> Self {
        Self::Remote {
            message: message.into(),
            status,
            fault,
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if the server reported a fault or an error status.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Returns `true` if the document could not be decoded.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::XmlDeserialization { .. })
    }

    /// Returns `true` if the response body could not be read.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns the HTTP status code attached to a remote error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns the fault attached to a remote error.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Remote { fault, .. } => fault.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn error_display() {
        let err = Error::connection("failed to connect");
        check!(err.to_string() == "connection error: failed to connect");

        let err = Error::xml_deserialization("action.fault", "unexpected end of file");
        check!(err.to_string() == "XML deserialization error at 'action.fault': unexpected end of file");

        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stream closed",
        ));
        check!(err.to_string() == "failed to read response, reason: stream closed");
    }

    #[test]
    fn remote_error_displays_composed_message() {
        let fault = Fault::new().with_reason("Operation Failed");
        let err = Error::remote(
            r#"Fault reason is "Operation Failed"."#,
            Some(409),
            Some(fault.clone()),
        );

        check!(err.to_string() == r#"Fault reason is "Operation Failed"."#);
        check!(err.is_remote());
        check!(err.status() == Some(409));
        check!(err.fault() == Some(&fault));
    }

    #[test]
    fn error_kinds() {
        let_assert!(Error::Io(_) = Error::from(std::io::Error::other("boom")));
        check!(Error::from(std::io::Error::other("boom")).is_io());
        check!(Error::xml_deserialization("", "bad").is_malformed());
        check!(!Error::connection("refused").is_remote());
        check!(Error::connection("refused").status().is_none());
        check!(Error::invalid_request("no path").fault().is_none());
    }
}
