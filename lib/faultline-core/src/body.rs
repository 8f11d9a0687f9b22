//! Response body buffering.

use std::io::Read;

use bytes::Bytes;

use crate::{Response, Result};

/// Read the whole response body into memory.
///
/// The body stream is consumed: after this call it is at end of stream and
/// must not be read again. The returned bytes are what every decode pass
/// works on.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the stream cannot be read to the end.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use faultline_core::{Response, materialize};
///
/// let mut response = Response::new(200, HashMap::new(), &b"<action/>"[..]);
/// let bytes = materialize(&mut response).expect("read");
/// assert_eq!(bytes.as_ref(), b"<action/>");
/// ```
pub fn materialize<R: Read>(response: &mut Response<R>) -> Result<Bytes> {
    let mut buf = Vec::new();
    response.body_mut().read_to_end(&mut buf)?;
    Ok(Bytes::from(buf))
}
