//! Response interpretation core for XML remote APIs.
//!
//! Given a response from a server that answers with `<fault>` and `<action>`
//! documents, decide whether it is a result, a reported fault, or something
//! else, and reduce it to a value or a single composed error.
//!
//! - [`Response`] and [`RawResponse`] - HTTP response types
//! - [`materialize`] - Read a body stream into memory, once
//! - [`xml`] - Root-aware XML decoding ([`Decoded`]) and encoding
//! - [`Fault`] and [`Action`] - Documents sent by the server
//! - [`decode_fault`] and [`decode_action`] - Independent decode passes
//! - [`compose_error`] - The human readable error message
//! - [`check_fault`] and [`check_action`] - What every call runs on its response
//! - [`Error`] and [`Result`] - Error handling

mod body;
mod check;
mod compose;
mod error;
mod interpret;
mod model;
pub mod prelude;
mod response;
pub mod xml;

pub use body::materialize;
pub use check::{check_action, check_fault};
pub use compose::{build_error, compose_error};
pub use error::{Error, Result};
pub use interpret::{decode_action, decode_fault};
pub use model::{ACTION_ROOT, Action, FAULT_ROOT, Fault};
pub use response::{RawResponse, Response};
pub use xml::Decoded;
