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

//! Shared payload plumbing: the encoder, pagination and the empty body

use moz_core::Result;
use serde::Serialize;
use serde_json::Value;

/// Encode any parameter struct as the JSON request body.
///
/// Serialization follows the struct's serde attributes, so unset optional
/// fields are dropped and field order is preserved.
pub fn encode_payload<T: Serialize + ?Sized>(params: &T) -> Result<String> {
  Ok(serde_json::to_string(params)?)
}

/// Body for operations that take no parameters (`{}`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyParams {}

/// Operations that accept a pagination token from a previous response.
///
/// The client never follows tokens on its own; read one with
/// [`next_token_of`] and pass it back explicitly.
pub trait Paginated: Sized {
  /// Replace the pagination token
  fn set_next_token(&mut self, token: Option<String>);

  /// Builder form of [`Paginated::set_next_token`]
  fn next_token(mut self, token: impl Into<String>) -> Self {
    self.set_next_token(Some(token.into()));
    self
  }
}

/// Implements [`Paginated`] for a struct with a `next_token: Option<String>` field
macro_rules! impl_paginated {
  ($($struct_name:ident),+ $(,)?) => {
    $(
      impl $crate::common::Paginated for $struct_name {
        fn set_next_token(&mut self, token: Option<String>) {
          self.next_token = token;
        }
      }
    )+
  };
}

pub(crate) use impl_paginated;

/// Pagination token carried by a response, if there is another page
pub fn next_token_of(response: &Value) -> Option<&str> {
  response.get("next_token").and_then(Value::as_str).filter(|t| !t.is_empty())
}

pub(crate) fn default_limit() -> u32 {
  moz_core::DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_empty_params_encode_as_empty_object() {
    assert_eq!(encode_payload(&EmptyParams::default()).unwrap(), "{}");
  }

  #[test]
  fn test_next_token_of() {
    let page = json!({"results": [], "next_token": "JYkQVg4s9ak8iRBWDiz1qTyguYswnj035nqrQ1oIbW96IGJsb2dZZ1JTXzg="});
    assert_eq!(next_token_of(&page), Some("JYkQVg4s9ak8iRBWDiz1qTyguYswnj035nqrQ1oIbW96IGJsb2dZZ1JTXzg="));

    assert_eq!(next_token_of(&json!({"results": [], "next_token": ""})), None);
    assert_eq!(next_token_of(&json!({"results": []})), None);
    assert_eq!(next_token_of(&Value::Null), None);
  }
}
