//! Prelude module for convenient imports.
//!
//! ```ignore
//! use faultline::prelude::*;
//! ```

pub use crate::{
    Action, BaseService, Connection, ConnectionConfig, Error, Fault, RawResponse, Response,
    Result, Service, UreqConnection, check_action, check_fault,
};
