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

//! Catalogue of the remote operations and their path segments

use serde::{Deserialize, Serialize};

/// The Moz Links API operations supported by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
  /// Anchor text used by followed external links to a target
  AnchorText,
  /// Final redirect target of a page
  FinalRedirect,
  /// Top pages in the whole index by page authority
  GlobalTopPages,
  /// Top root domains in the whole index by domain authority
  GlobalTopRootDomains,
  /// Identifier that changes whenever the index data changes
  IndexMetadata,
  /// Sources linking to positive targets but none of the negative ones
  LinkIntersect,
  /// Link status between many sources and one target
  LinkStatus,
  /// Root domains linking to a target
  LinkingRootDomains,
  /// Detailed backlink listing
  Links,
  /// Top pages of a single site
  TopPages,
  /// Per-URL metric bundle
  UrlMetrics,
  /// Rows consumed in the current billing period
  UsageData,
}

impl Endpoint {
  /// Every supported endpoint.
  pub const ALL: [Endpoint; 12] = [
    Endpoint::AnchorText,
    Endpoint::FinalRedirect,
    Endpoint::GlobalTopPages,
    Endpoint::GlobalTopRootDomains,
    Endpoint::IndexMetadata,
    Endpoint::LinkIntersect,
    Endpoint::LinkStatus,
    Endpoint::LinkingRootDomains,
    Endpoint::Links,
    Endpoint::TopPages,
    Endpoint::UrlMetrics,
    Endpoint::UsageData,
  ];

  /// Path segment appended to the base URL.
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::AnchorText => "anchor_text",
      Endpoint::FinalRedirect => "final_redirect",
      Endpoint::GlobalTopPages => "global_top_pages",
      Endpoint::GlobalTopRootDomains => "global_top_root_domains",
      Endpoint::IndexMetadata => "index_metadata",
      Endpoint::LinkIntersect => "link_intersect",
      Endpoint::LinkStatus => "link_status",
      Endpoint::LinkingRootDomains => "linking_root_domains",
      Endpoint::Links => "links",
      Endpoint::TopPages => "top_pages",
      Endpoint::UrlMetrics => "url_metrics",
      Endpoint::UsageData => "usage_data",
    }
  }

  /// Weighted endpoints may bill more than one row per returned row.
  ///
  /// Informational only, the client does not meter quota.
  pub fn is_weighted(&self) -> bool {
    matches!(self, Endpoint::LinkIntersect | Endpoint::LinkStatus | Endpoint::UrlMetrics)
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.path())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_paths_are_unique() {
    let paths: HashSet<_> = Endpoint::ALL.into_iter().map(|e| e.path()).collect();
    assert_eq!(paths.len(), Endpoint::ALL.len());
  }

  #[test]
  fn test_display_matches_path() {
    for endpoint in Endpoint::ALL {
      assert_eq!(endpoint.to_string(), endpoint.path());
    }
    assert_eq!(Endpoint::Links.to_string(), "links");
  }

  #[test]
  fn test_weighted_endpoints() {
    let weighted: Vec<Endpoint> = Endpoint::ALL.into_iter().filter(|e| e.is_weighted()).collect();
    assert_eq!(weighted, vec![Endpoint::LinkIntersect, Endpoint::LinkStatus, Endpoint::UrlMetrics]);
  }

  #[test]
  fn test_serde_uses_path_names() {
    let json = serde_json::to_string(&Endpoint::GlobalTopRootDomains).unwrap();
    assert_eq!(json, "\"global_top_root_domains\"");
  }
}
