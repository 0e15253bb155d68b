//! Configuration management for the Moz client

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Content type declared on outgoing requests. The body is JSON either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
  /// `application/json`
  #[default]
  Json,
  /// `application/x-www-form-urlencoded`, the header older Moz clients sent
  FormUrlEncoded,
}

impl ContentType {
  /// Header value for this content type
  pub fn as_header(&self) -> &'static str {
    match self {
      ContentType::Json => "application/json",
      ContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
    }
  }
}

impl std::str::FromStr for ContentType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "json" | "application/json" => Ok(ContentType::Json),
      "form" | "application/x-www-form-urlencoded" => Ok(ContentType::FormUrlEncoded),
      other => Err(Error::Config(format!("Invalid MOZ_CONTENT_TYPE: {}", other))),
    }
  }
}

/// Main configuration struct for the Moz client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Access id and secret key
  pub credentials: Credentials,

  /// Base URL for the Moz Links API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Optional client side throttle (requests per minute)
  pub rate_limit: Option<u32>,

  /// Declared request content type
  pub content_type: ContentType,
}

impl Config {
  /// Config with default settings for the given credentials.
  ///
  /// Performs no validation and no network activity.
  pub fn new(access_id: impl Into<String>, secret: impl Into<String>) -> Self {
    Config {
      credentials: Credentials::new(access_id, secret),
      base_url: crate::MOZ_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      rate_limit: None,
      content_type: ContentType::default(),
    }
  }

  /// Load configuration from environment variables (and `.env`, if present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a config from an arbitrary key lookup using the `MOZ_*` names
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let access_id = lookup("MOZ_ACCESS_ID")
      .ok_or_else(|| Error::Credentials("MOZ_ACCESS_ID not set".to_string()))?;

    let secret = lookup("MOZ_SECRET_KEY")
      .ok_or_else(|| Error::Credentials("MOZ_SECRET_KEY not set".to_string()))?;

    let base_url = lookup("MOZ_BASE_URL").unwrap_or_else(|| crate::MOZ_BASE_URL.to_string());
    url::Url::parse(&base_url)
      .map_err(|e| Error::Config(format!("Invalid MOZ_BASE_URL {}: {}", base_url, e)))?;

    let timeout_secs = match lookup("MOZ_TIMEOUT_SECS") {
      Some(v) => v.parse().map_err(|_| Error::Config("Invalid MOZ_TIMEOUT_SECS".to_string()))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    let rate_limit = match lookup("MOZ_RATE_LIMIT") {
      Some(v) => Some(v.parse().map_err(|_| Error::Config("Invalid MOZ_RATE_LIMIT".to_string()))?),
      None => None,
    };

    let content_type = match lookup("MOZ_CONTENT_TYPE") {
      Some(v) => v.parse()?,
      None => ContentType::default(),
    };

    Ok(Config {
      credentials: Credentials::new(access_id, secret),
      base_url,
      timeout_secs,
      rate_limit,
      content_type,
    })
  }

  /// Point the client at a different host (mock servers, proxies)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Override the request timeout
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Throttle requests to `per_minute`
  pub fn with_rate_limit(mut self, per_minute: u32) -> Self {
    self.rate_limit = Some(per_minute);
    self
  }

  /// Choose the declared content type
  pub fn with_content_type(mut self, content_type: ContentType) -> Self {
    self.content_type = content_type;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn test_config_defaults() {
    let config = Config::from_lookup(lookup_from(&[
      ("MOZ_ACCESS_ID", "member-1"),
      ("MOZ_SECRET_KEY", "secret"),
    ]))
    .unwrap();

    assert_eq!(config.credentials.access_id(), "member-1");
    assert_eq!(config.base_url, crate::MOZ_BASE_URL);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.rate_limit, None);
    assert_eq!(config.content_type, ContentType::Json);
  }

  #[test]
  fn test_config_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      ("MOZ_ACCESS_ID", "member-1"),
      ("MOZ_SECRET_KEY", "secret"),
      ("MOZ_BASE_URL", "http://127.0.0.1:9000/v2"),
      ("MOZ_TIMEOUT_SECS", "5"),
      ("MOZ_RATE_LIMIT", "6"),
      ("MOZ_CONTENT_TYPE", "form"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "http://127.0.0.1:9000/v2");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.rate_limit, Some(6));
    assert_eq!(config.content_type, ContentType::FormUrlEncoded);
  }

  #[test]
  fn test_missing_secret() {
    let err = Config::from_lookup(lookup_from(&[("MOZ_ACCESS_ID", "member-1")])).unwrap_err();
    assert!(matches!(err, Error::Credentials(_)));
  }

  #[test]
  fn test_invalid_numbers() {
    let err = Config::from_lookup(lookup_from(&[
      ("MOZ_ACCESS_ID", "member-1"),
      ("MOZ_SECRET_KEY", "secret"),
      ("MOZ_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = Config::from_lookup(lookup_from(&[
      ("MOZ_ACCESS_ID", "member-1"),
      ("MOZ_SECRET_KEY", "secret"),
      ("MOZ_CONTENT_TYPE", "xml"),
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
  }

  #[test]
  fn test_builder_chain() {
    let config = Config::new("id", "secret")
      .with_base_url("http://localhost:1234")
      .with_timeout_secs(2)
      .with_rate_limit(10)
      .with_content_type(ContentType::FormUrlEncoded);

    assert_eq!(config.base_url, "http://localhost:1234");
    assert_eq!(config.timeout_secs, 2);
    assert_eq!(config.rate_limit, Some(10));
    assert_eq!(config.content_type.as_header(), "application/x-www-form-urlencoded");
  }
}
