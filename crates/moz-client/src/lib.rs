//! # moz-client
//!
//! An async client for the Moz Links API v2.
//!
//! ## Features
//!
//! - **Typed requests**: one parameter struct per operation (see `moz-models`)
//! - **Pass-through responses**: every call returns the decoded JSON as a
//!   `serde_json::Value`, exactly as the service sent it
//! - **Distinguishable failures**: transport, HTTP status and decode errors
//!   are separate variants of `moz_core::Error`
//! - **Optional throttling**: a client side per-minute rate limit
//!
//! ## Usage
//!
//! ```rust,no_run
//! use moz_client::MozClient;
//! use moz_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = MozClient::new(config)?;
//!
//!     let metrics = client.metrics().url_metrics(&["moz.com"]).await?;
//!     println!("Domain authority: {}", metrics["results"][0]["domain_authority"]);
//!
//!     let usage = client.account().usage_data().await?;
//!     println!("Rows used this period: {}", usage["rows_consumed"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! List endpoints return a `next_token`. The client never follows it; pass
//! it back through the parameter struct (`Paginated::next_token`) to fetch
//! the next page.
//!
//! ## Error Handling
//!
//! All methods return `Result<serde_json::Value, moz_core::Error>`. Nothing
//! is retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::MozClient;
pub use moz_core::{Config, ContentType, Credentials, Endpoint, Error, Result};
pub use moz_models::*;

// Re-export endpoint groups for direct access if needed
pub use endpoints::{
  account::AccountEndpoints, global::GlobalEndpoints, links::LinksEndpoints,
  metrics::MetricsEndpoints,
};
