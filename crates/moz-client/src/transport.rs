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

//! HTTP transport layer for Moz Links API requests
//!
//! Every operation ends up here: one authenticated POST per call, no
//! retries, no redirects beyond what reqwest does by default.

use moz_core::{Config, ContentType, Endpoint, Error, Result};
use moz_models::encode_payload;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Characters of a failing body kept in log lines
const LOG_SNIPPET_CHARS: usize = 500;

/// Authenticated HTTP transport for the Moz API
pub struct Transport {
  client: Client,
  base_url: String,
  authorization: HeaderValue,
  content_type: ContentType,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  ///
  /// Builds the HTTP client and precomputes the `Authorization` header. No
  /// request is sent.
  pub fn new(config: &Config) -> Result<Self> {
    Url::parse(&config.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", config.base_url, e)))?;

    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(moz_core::USER_AGENT)
      .build()
      .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))?;

    let mut authorization = HeaderValue::from_str(&config.credentials.authorization_header())
      .map_err(|_| Error::Credentials("Credentials produce an invalid header".to_string()))?;
    authorization.set_sensitive(true);

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      authorization,
      content_type: config.content_type,
      timeout,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self::new(&Config::new("mock-id", "mock-secret").with_base_url("https://mock.lsapi.seomoz.com/v2"))
      .expect("mock transport")
  }

  /// Full URL for an endpoint
  pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
    format!("{}/{}", self.base_url, endpoint.path())
  }

  /// POST a pre-encoded JSON body and return the raw response body.
  ///
  /// Non-2xx answers become [`Error::HttpStatus`] carrying the body the
  /// service sent; network failures become [`Error::Transport`].
  #[instrument(skip(self, body), fields(endpoint = %endpoint, body_len = body.len()))]
  pub async fn post(&self, endpoint: Endpoint, body: String) -> Result<String> {
    let url = self.endpoint_url(endpoint);
    debug!("Making request to: {}", url);

    #[cfg(feature = "debug-logging")]
    debug!(payload = %body, "Request payload");

    let response = self
      .client
      .post(&url)
      .header(AUTHORIZATION, self.authorization.clone())
      .header(CONTENT_TYPE, self.content_type.as_header())
      .body(body)
      .send()
      .await
      .map_err(|e| {
        error!("Request to {} failed: {}", endpoint, e);
        Error::Transport(format!("Request failed: {}", e))
      })?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with {} bytes", status, text.len());

    if !status.is_success() {
      error!("Request failed with status {}: {}", status, snippet(&text));
      return Err(Error::HttpStatus { status: status.as_u16(), body: text });
    }

    Ok(text)
  }

  /// Encode `params`, POST them and decode the JSON answer as-is
  pub async fn post_json<P>(&self, endpoint: Endpoint, params: &P) -> Result<Value>
  where
    P: Serialize + ?Sized,
  {
    let body = encode_payload(params)?;
    let text = self.post(endpoint, body).await?;
    decode_body(&text)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Declared request content type
  pub fn content_type(&self) -> ContentType {
    self.content_type
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("content_type", &self.content_type)
      .field("timeout", &self.timeout)
      .finish_non_exhaustive()
  }
}

/// Decode a response body without imposing any schema.
///
/// An empty body, which the service sends when it has nothing to report,
/// decodes to `Value::Null`. Anything else that is not JSON is an error.
pub fn decode_body(text: &str) -> Result<Value> {
  if text.trim().is_empty() {
    return Ok(Value::Null);
  }

  serde_json::from_str(text).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    error!("Response text (first {} chars): {}", LOG_SNIPPET_CHARS, snippet(text));
    Error::Decode { message: e.to_string(), body: text.to_string() }
  })
}

fn snippet(text: &str) -> String {
  text.chars().take(LOG_SNIPPET_CHARS).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_endpoint_url() {
    let transport = Transport::new_mock();
    assert_eq!(transport.endpoint_url(Endpoint::Links), "https://mock.lsapi.seomoz.com/v2/links");
    assert_eq!(
      transport.endpoint_url(Endpoint::GlobalTopRootDomains),
      "https://mock.lsapi.seomoz.com/v2/global_top_root_domains"
    );
  }

  #[test]
  fn test_trailing_slash_is_trimmed() {
    let config = Config::new("id", "secret").with_base_url("http://localhost:8080/v2/");
    let transport = Transport::new(&config).unwrap();
    assert_eq!(transport.endpoint_url(Endpoint::UsageData), "http://localhost:8080/v2/usage_data");
  }

  #[test]
  fn test_invalid_base_url() {
    let config = Config::new("id", "secret").with_base_url("not a url");
    assert!(matches!(Transport::new(&config), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_hides_authorization() {
    let debug = format!("{:?}", Transport::new_mock());
    assert!(!debug.contains("Basic"));
    assert!(!debug.contains("mock-secret"));
  }

  #[test]
  fn test_decode_body_passes_through() {
    let body = r#"{"index_id":"NE+lX5bFh06baS9ojUwVbw==","spam_score_update_days":["2024-01-12"]}"#;
    assert_eq!(
      decode_body(body).unwrap(),
      json!({"index_id": "NE+lX5bFh06baS9ojUwVbw==", "spam_score_update_days": ["2024-01-12"]})
    );
  }

  #[test]
  fn test_decode_body_empty_is_null() {
    assert_eq!(decode_body("").unwrap(), Value::Null);
    assert_eq!(decode_body("  \n").unwrap(), Value::Null);
  }

  #[test]
  fn test_decode_body_rejects_html() {
    let err = decode_body("<html><body>Bad Gateway</body></html>").unwrap_err();
    assert!(err.is_decode());
    if let Error::Decode { body, .. } = err {
      assert!(body.starts_with("<html>"));
    }
  }
}
