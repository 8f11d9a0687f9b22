//! Response checks used by every remote call.
//!
//! - [`check_fault`] - for calls that return nothing on success
//! - [`check_action`] - for calls that return an [`Action`]
//!
//! Both read the body exactly once, then decode the buffered bytes as many
//! times as needed.

use std::io::Read;

use crate::interpret::{decode_action, decode_fault};
use crate::{Action, Decoded, Response, Result, build_error, materialize};

/// Check a response that is expected to carry no result.
///
/// Returns `Ok(())` as soon as the body turns out not to be a `<fault>`
/// document, whatever the HTTP status code is. Any decoded fault, even an
/// empty `<fault/>`, becomes an [`crate::Error::Remote`].
///
/// # Errors
///
/// - [`crate::Error::Io`] if the body cannot be read
/// - [`crate::Error::XmlDeserialization`] if the body is a broken fault document
/// - [`crate::Error::Remote`] if the server reported a fault
pub fn check_fault<R: Read>(response: &mut Response<R>) -> Result<()> {
    let bytes = materialize(response)?;

    let fault = match decode_fault(&bytes) {
        Decoded::Matched(fault) => fault,
        Decoded::ShapeMismatch => return Ok(()),
        Decoded::Malformed(err) => return Err(err),
    };

    Err(build_error(Some(&fault), Some(&*response)))
}

/// Check a response that is expected to carry an [`Action`].
///
/// A top-level `<fault>` takes priority over action decoding. An action that
/// embeds a fault is reported as an error built from that nested fault.
/// A body that is neither a fault nor an action yields `Ok(None)`.
///
/// # Errors
///
/// - [`crate::Error::Io`] if the body cannot be read
/// - [`crate::Error::XmlDeserialization`] if the body is a broken fault or
///   action document
/// - [`crate::Error::Remote`] if the server reported a fault
pub fn check_action<R: Read>(response: &mut Response<R>) -> Result<Option<Action>> {
    let bytes = materialize(response)?;

    match decode_fault(&bytes) {
        Decoded::Matched(fault) => return Err(build_error(Some(&fault), Some(&*response))),
        Decoded::ShapeMismatch => {}
        Decoded::Malformed(err) => return Err(err),
    }

    match decode_action(&bytes) {
        Decoded::Matched(action) => match action.fault() {
            Some(fault) => Err(build_error(Some(fault), Some(&*response))),
            None => Ok(Some(action)),
        },
        Decoded::ShapeMismatch => Ok(None),
        Decoded::Malformed(err) => Err(err),
    }
}
