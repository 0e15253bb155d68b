//! Endpoint groups
//!
//! Each group is a thin view over the shared transport and optional rate
//! limiter; creating one is free.

/// Index metadata and usage data
pub mod account;
/// Global top pages and root domains
pub mod global;
/// Anchor text and link graph operations
pub mod links;
/// URL metrics, top pages and final redirects
pub mod metrics;

use crate::transport::Transport;
use governor::DefaultDirectRateLimiter;
use moz_core::{Endpoint, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Optional shared client side throttle
pub type SharedRateLimiter = Option<Arc<DefaultDirectRateLimiter>>;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub(crate) trait EndpointBase {
  /// Wait for the rate limiter, if one is configured
  async fn wait_for_rate_limit(&self);

  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Throttle, then send exactly one request for `endpoint`
  async fn dispatch<P>(&self, endpoint: Endpoint, params: &P) -> Result<Value>
  where
    P: Serialize + ?Sized,
  {
    self.wait_for_rate_limit().await;
    self.transport().post_json(endpoint, params).await
  }
}

/// Macro to define an endpoint group struct and implement `EndpointBase` for it
macro_rules! endpoint_group {
  ($(#[$meta:meta])* $struct_name:ident) => {
    $(#[$meta])*
    #[derive(Clone)]
    pub struct $struct_name {
      transport: std::sync::Arc<$crate::transport::Transport>,
      rate_limiter: $crate::endpoints::SharedRateLimiter,
    }

    impl $struct_name {
      /// Create a new endpoint group over a shared transport
      pub fn new(
        transport: std::sync::Arc<$crate::transport::Transport>,
        rate_limiter: $crate::endpoints::SharedRateLimiter,
      ) -> Self {
        Self { transport, rate_limiter }
      }
    }

    impl std::fmt::Debug for $struct_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!($struct_name))
          .field("transport", &self.transport)
          .field("rate_limited", &self.rate_limiter.is_some())
          .finish()
      }
    }

    impl $crate::endpoints::EndpointBase for $struct_name {
      async fn wait_for_rate_limit(&self) {
        if let Some(limiter) = &self.rate_limiter {
          limiter.until_ready().await;
        }
      }

      fn transport(&self) -> &std::sync::Arc<$crate::transport::Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use endpoint_group;
