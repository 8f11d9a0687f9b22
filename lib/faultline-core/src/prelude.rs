//! Prelude module for convenient imports.
//!
//! ```ignore
//! use faultline_core::prelude::*;
//! ```

pub use crate::{
    Action, Decoded, Error, Fault, RawResponse, Response, Result, check_action, check_fault,
    compose_error,
};
