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

//! Payload for the index-wide top lists (`global_top_pages`, `global_top_root_domains`)

use crate::common::{default_limit, impl_paginated};
use serde::Serialize;

/// Request body shared by both global top lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalTopParams {
  /// Page size (default 50)
  pub limit: u32,
  /// Token from a previous page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_token: Option<String>,
}

impl GlobalTopParams {
  /// Parameters with a custom page size
  pub fn new(limit: u32) -> Self {
    Self { limit, next_token: None }
  }
}

impl Default for GlobalTopParams {
  fn default() -> Self {
    Self::new(default_limit())
  }
}

impl_paginated!(GlobalTopParams);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::{encode_payload, Paginated};

  #[test]
  fn test_global_top_defaults() {
    assert_eq!(encode_payload(&GlobalTopParams::default()).unwrap(), r#"{"limit":50}"#);
  }

  #[test]
  fn test_global_top_token_passes_through_unchanged() {
    let token = "YWJjZGVm+/==";
    let params = GlobalTopParams::new(25).next_token(token);
    assert_eq!(encode_payload(&params).unwrap(), format!(r#"{{"limit":25,"next_token":"{}"}}"#, token));
  }
}
