//! Blocking client for XML remote APIs that report structured faults.
//!
//! Every call ends by running one of the response checks from
//! [`faultline_core`]: the body is read once, a `<fault>` document (at top
//! level, or nested in an `<action>`) becomes a single [`Error::Remote`]
//! whose message merges the fault with the HTTP status line.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use faultline::prelude::*;
//!
//! let connection = Arc::new(UreqConnection::new("https://engine.example.com/api".parse()?));
//! let vms = BaseService::new(connection, "vms");
//!
//! match vms.service("123").invoke("start", &Action::new()) {
//!     Ok(action) => println!("started: {:?}", action.and_then(|a| a.status().map(str::to_owned))),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

mod config;
mod connection;
pub mod prelude;
mod service;

pub use config::{ConnectionConfig, ConnectionConfigBuilder};
pub use connection::{Connection, UreqConnection};
pub use service::{BaseService, Service};

// Re-export core types
pub use faultline_core::{
    ACTION_ROOT, Action, Decoded, Error, FAULT_ROOT, Fault, RawResponse, Response, Result,
    build_error, check_action, check_fault, compose_error, decode_action, decode_fault,
    materialize, xml,
};

// Re-export crates used in the public API
pub use url;
