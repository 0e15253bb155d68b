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

//! Access credentials and the Basic authentication header derived from them

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Moz access id and secret key.
///
/// Both values are stored as given; nothing is validated until the service
/// sees them. The secret is never serialized and is redacted from `Debug`.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
  access_id: String,
  #[serde(skip_serializing)]
  secret: String,
}

impl Credentials {
  /// Wrap an access id and secret key
  pub fn new(access_id: impl Into<String>, secret: impl Into<String>) -> Self {
    Self { access_id: access_id.into(), secret: secret.into() }
  }

  /// The public half of the credentials
  pub fn access_id(&self) -> &str {
    &self.access_id
  }

  /// `Authorization` header value: `Basic base64(access_id:secret)`
  pub fn authorization_header(&self) -> String {
    let raw = format!("{}:{}", self.access_id, self.secret);
    format!("Basic {}", STANDARD.encode(raw))
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("access_id", &self.access_id)
      .field("secret", &"<redacted>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_authorization_header() {
    // base64("mozscape-abc:s3cret") computed independently
    let creds = Credentials::new("mozscape-abc", "s3cret");
    assert_eq!(creds.authorization_header(), "Basic bW96c2NhcGUtYWJjOnMzY3JldA==");
  }

  #[test]
  fn test_empty_credentials_are_accepted() {
    let creds = Credentials::new("", "");
    assert_eq!(creds.authorization_header(), "Basic Og==");
  }

  #[test]
  fn test_debug_redacts_secret() {
    let creds = Credentials::new("member-123", "topsecret");
    let debug = format!("{:?}", creds);
    assert!(debug.contains("member-123"));
    assert!(!debug.contains("topsecret"));
  }

  #[test]
  fn test_secret_not_serialized() {
    let creds = Credentials::new("member-123", "topsecret");
    let json = serde_json::to_string(&creds).unwrap();
    assert_eq!(json, r#"{"access_id":"member-123"}"#);
  }
}
