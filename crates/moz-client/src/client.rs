/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The `MozClient` entry point

use crate::endpoints::{
  account::AccountEndpoints, global::GlobalEndpoints, links::LinksEndpoints,
  metrics::MetricsEndpoints, SharedRateLimiter,
};

use crate::transport::Transport;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use moz_core::{Config, Result};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::warn;

/// Main Moz Links API client
///
/// Provides access to every Moz Links API v2 operation through endpoint
/// groups. Construction does no network I/O and does not check the
/// credentials; bad credentials surface as an HTTP 401 from the first call.
///
/// The client is cheap to clone and safe to share across tasks. Each call
/// sends exactly one request. To bound a single call, wrap it in
/// `tokio::time::timeout`; dropping the future cancels the request.
///
/// # Examples
///
/// ```rust,no_run
/// use moz_client::{MozClient, LinkingRootDomainsParams};
///
/// # async fn run() -> moz_client::Result<()> {
/// let client = MozClient::from_credentials("mozscape-XXXXXXXX", "secret-key")?;
///
/// let da = client.metrics().url_metrics(&["moz.com"]).await?;
/// println!("{}", da["results"][0]["domain_authority"]);
///
/// let params = LinkingRootDomainsParams::new("moz.com").target_scope("root_domain").limit(10);
/// let domains = client.links().linking_root_domains_with_options(&params).await?;
/// println!("{}", domains);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MozClient {
  rate_limiter: SharedRateLimiter,
  transport: Arc<Transport>,
}

impl MozClient {
  /// Create a new Moz API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing credentials and transport settings
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot be
  /// created.
  pub fn new(config: Config) -> Result<Self> {
    let rate_limiter = match config.rate_limit {
      Some(per_minute) => match NonZeroU32::new(per_minute) {
        Some(per_minute) => Some(Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)))),
        None => {
          warn!("Ignoring a rate limit of 0 requests per minute");
          None
        }
      },
      None => None,
    };

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter })
  }

  /// Create a client with default settings from an access id and secret key
  pub fn from_credentials(access_id: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
    Self::new(Config::new(access_id, secret))
  }

  /// Create a new client sharing an existing rate limiter
  ///
  /// Useful when several clients draw from the same account quota. Any
  /// `rate_limit` in `config` is ignored.
  pub fn with_rate_limiter(config: Config, rate_limiter: Arc<DefaultDirectRateLimiter>) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?), rate_limiter: Some(rate_limiter) })
  }

  /// Link graph endpoints: anchor text, link intersect, link status,
  /// linking root domains and the backlink listing
  pub fn links(&self) -> LinksEndpoints {
    LinksEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// URL metrics, a site's top pages and final redirects
  pub fn metrics(&self) -> MetricsEndpoints {
    MetricsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Index-wide top pages and root domains
  pub fn global(&self) -> GlobalEndpoints {
    GlobalEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Index metadata and quota usage
  pub fn account(&self) -> AccountEndpoints {
    AccountEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }

  /// Whether requests are throttled client side
  pub fn is_rate_limited(&self) -> bool {
    self.rate_limiter.is_some()
  }
}

impl std::fmt::Debug for MozClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MozClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &self.rate_limiter.as_ref().map(|_| "RateLimiter"))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let client = MozClient::from_credentials("mozscape-test", "secret").expect("Failed to create client");
    assert_eq!(client.base_url(), moz_core::MOZ_BASE_URL);
    assert!(!client.is_rate_limited());
  }

  #[test]
  fn test_rate_limited_client_creation() {
    let config = Config::new("mozscape-test", "secret").with_rate_limit(6);
    let client = MozClient::new(config).expect("Failed to create client");
    assert!(client.is_rate_limited());

    let config = Config::new("mozscape-test", "secret").with_rate_limit(0);
    let client = MozClient::new(config).expect("Failed to create client");
    assert!(!client.is_rate_limited());
  }

  #[test]
  fn test_client_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MozClient>();
  }

  #[test]
  fn test_debug_does_not_leak_secret() {
    let client = MozClient::from_credentials("mozscape-test", "hunter2").unwrap();
    assert!(!format!("{:?}", client).contains("hunter2"));
  }
}
