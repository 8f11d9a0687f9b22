//! XML document decoding and encoding.
//!
//! Decoding distinguishes "this is not the document you asked for" from
//! "this is the document you asked for, but it is broken". The first is a
//! normal outcome ([`Decoded::ShapeMismatch`]); the second carries an
//! [`Error`] ([`Decoded::Malformed`]).

use bytes::Bytes;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::{Error, Result};

/// Outcome of decoding a document against an expected root element.
#[derive(Debug)]
pub enum Decoded<T> {
    /// The root element matched and the content decoded.
    Matched(T),
    /// The document is not rooted at the expected element.
    ShapeMismatch,
    /// The root element matched (or could not be read), but the content is
    /// malformed.
    Malformed(Error),
}

impl<T> Decoded<T> {
    /// Returns `true` for [`Decoded::ShapeMismatch`].
    #[must_use]
    pub const fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch)
    }

    /// Transform the matched value.
    pub fn map<U, F>(self, f: F) -> Decoded<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Matched(value) => Decoded::Matched(f(value)),
            Self::ShapeMismatch => Decoded::ShapeMismatch,
            Self::Malformed(err) => Decoded::Malformed(err),
        }
    }

    /// Collapse into a result, a shape mismatch becoming `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Self::Matched(value) => Ok(Some(value)),
            Self::ShapeMismatch => Ok(None),
            Self::Malformed(err) => Err(err),
        }
    }
}

/// Decode `bytes` as a document rooted at `<root>`.
///
/// Bodies with no element at all (empty, whitespace, plain text) are a
/// shape mismatch. Namespace prefixes on the root element are ignored.
///
/// # Example
///
/// ```
/// use faultline_core::{Decoded, Fault, xml};
///
/// let decoded = xml::decode::<Fault>(b"<fault><reason>Boom</reason></fault>", "fault");
/// let Decoded::Matched(fault) = decoded else { panic!("expected a fault") };
/// assert_eq!(fault.reason(), Some("Boom"));
///
/// assert!(xml::decode::<Fault>(b"<action/>", "fault").is_shape_mismatch());
/// ```
pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8], root: &str) -> Decoded<T> {
    match has_root(bytes, root) {
        Ok(true) => {}
        Ok(false) => return Decoded::ShapeMismatch,
        Err(err) => return Decoded::Malformed(err),
    }

    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => return Decoded::Malformed(Error::xml_deserialization(root, err.to_string())),
    };

    let mut deserializer = quick_xml::de::Deserializer::from_str(text);
    match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(value) => Decoded::Matched(value),
        Err(err) => Decoded::Malformed(Error::xml_deserialization(
            qualified_path(root, &err.path().to_string()),
            err.inner().to_string(),
        )),
    }
}

/// Serialize `value` as a document rooted at `<root>`.
///
/// # Example
///
/// ```
/// use faultline_core::{Action, xml};
///
/// let bytes = xml::encode(&Action::new().with_status("complete"), "action").expect("encode");
/// assert_eq!(bytes.as_ref(), b"<action><status>complete</status></action>");
/// ```
pub fn encode<T: serde::Serialize>(value: &T, root: &str) -> Result<Bytes> {
    quick_xml::se::to_string_with_root(root, value)
        .map(|s| Bytes::from(s.into_bytes()))
        .map_err(|e| Error::xml_serialization(e.to_string()))
}

/// Checks whether the first element of the document is `<root>`.
fn has_root(bytes: &[u8], root: &str) -> Result<bool> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                return Ok(e.local_name().as_ref() == root.as_bytes());
            }
            Ok(Event::Eof) => return Ok(false),
            Ok(_) => {}
            Err(err) => return Err(Error::xml_deserialization("", err.to_string())),
        }
        buf.clear();
    }
}

fn qualified_path(root: &str, path: &str) -> String {
    if path.is_empty() || path == "." {
        root.to_string()
    } else {
        format!("{root}.{path}")
    }
}
