//! # moz-models
//!
//! Request payloads for every Moz Links API v2 operation.
//!
//! Each operation has its own parameter struct. Field order is wire order,
//! parameters with a documented server default start out at that default
//! and are always sent, and parameters without one are `Option`s that are
//! left out of the body entirely when unset. A handful of fields are always
//! sent even when empty because the service has always received them that
//! way; those are called out on the struct.
//!
//! ## Usage
//!
//! ```
//! use moz_models::{encode_payload, AnchorTextParams};
//!
//! let params = AnchorTextParams::new("moz.com").scope("root_domain").limit(10);
//! let body = encode_payload(&params).unwrap();
//! assert_eq!(body, r#"{"target":"moz.com","scope":"root_domain","limit":10}"#);
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod global;
pub mod links;
pub mod metrics;

pub use common::*;
pub use global::*;
pub use links::*;
pub use metrics::*;
