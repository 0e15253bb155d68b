use thiserror::Error;

/// The main error type for moz-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing or unusable credentials
  #[error("Credentials error: {0}")]
  Credentials(String),

  /// Request payload could not be encoded
  #[error("Serialization error: {0}")]
  Serialize(#[from] serde_json::Error),

  /// Network level failure: DNS, connect, TLS, timeout or body read
  #[error("Transport error: {0}")]
  Transport(String),

  /// The service answered with a non-success status
  #[error("HTTP status {status}: {body}")]
  HttpStatus {
    /// Status code returned by the service
    status: u16,
    /// Raw response body, usually the service's own error payload
    body: String,
  },

  /// The response body was not valid JSON
  #[error("Failed to decode response: {message}")]
  Decode {
    /// Decoder message
    message: String,
    /// Raw response body
    body: String,
  },
}

impl Error {
  /// True for network level failures
  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Transport(_))
  }

  /// True when the service returned a non-success status
  pub fn is_status(&self) -> bool {
    matches!(self, Error::HttpStatus { .. })
  }

  /// True when the body could not be decoded as JSON
  pub fn is_decode(&self) -> bool {
    matches!(self, Error::Decode { .. })
  }

  /// HTTP status of the failed call, if the service answered at all
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::HttpStatus { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Result type alias for moz-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_accessor() {
    let err = Error::HttpStatus { status: 401, body: r#"{"name":"Unauthorized"}"#.to_string() };
    assert!(err.is_status());
    assert_eq!(err.status(), Some(401));
    assert!(!err.is_decode());

    let err = Error::Transport("connection refused".to_string());
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
  }
}
