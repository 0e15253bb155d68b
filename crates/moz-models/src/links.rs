//! Payloads for the link graph operations: anchor text, link intersect,
//! link status, linking root domains and the backlink listing (`links`).

use crate::common::{default_limit, impl_paginated};
use chrono::NaiveDate;
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `anchor_text` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorTextParams {
  /// Page, subdomain or root domain to inspect
  pub target: String,
  /// Granularity of the target (default `page`)
  pub scope: String,
  /// Page size (default 50)
  pub limit: u32,
  /// Token from a previous page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_token: Option<String>,
}

impl AnchorTextParams {
  /// Parameters for `target` with the service defaults
  pub fn new(target: impl Into<String>) -> Self {
    Self { target: target.into(), scope: "page".to_string(), limit: default_limit(), next_token: None }
  }

  /// Set the target scope
  pub fn scope(mut self, scope: impl Into<String>) -> Self {
    self.scope = scope.into();
    self
  }

  /// Set the page size
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = limit;
    self
  }
}

/// `link_intersect` request
///
/// `negative_targets` is always sent, as an empty list when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkIntersectParams {
  /// Sources must link to at least one of these
  pub positive_targets: Vec<String>,
  /// Sources must link to none of these
  pub negative_targets: Vec<String>,
  /// Minimum number of positive targets a source must link to
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_matching_targets: Option<u32>,
  /// Scope of the returned sources (default `page`)
  pub source_scope: String,
  /// Sort order
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sort: Option<String>,
  /// Page size (default 50)
  pub limit: u32,
}

impl LinkIntersectParams {
  /// Parameters for a set of positive targets
  pub fn new<I, S>(positive_targets: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      positive_targets: positive_targets.into_iter().map(Into::into).collect(),
      negative_targets: Vec::new(),
      min_matching_targets: None,
      source_scope: "page".to_string(),
      sort: None,
      limit: default_limit(),
    }
  }

  /// Exclude sources linking to any of these targets
  pub fn negative_targets<I, S>(mut self, targets: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.negative_targets = targets.into_iter().map(Into::into).collect();
    self
  }

  /// Require at least `n` matching positive targets
  pub fn min_matching_targets(mut self, n: u32) -> Self {
    self.min_matching_targets = Some(n);
    self
  }

  /// Set the source scope
  pub fn source_scope(mut self, scope: impl Into<String>) -> Self {
    self.source_scope = scope.into();
    self
  }

  /// Set the sort order
  pub fn sort(mut self, sort: impl Into<String>) -> Self {
    self.sort = Some(sort.into());
    self
  }

  /// Set the page size
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = limit;
    self
  }
}

/// `link_status` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkStatusParams {
  /// Candidate linking sources
  pub sources: Vec<String>,
  /// The single target
  pub target: String,
  /// Scope of the target (default `page`)
  pub target_scope: String,
  /// Scope of the sources (default `page`)
  pub source_scope: String,
}

impl LinkStatusParams {
  /// Parameters for `sources` linking to `target`
  pub fn new<I, S>(sources: I, target: impl Into<String>) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      sources: sources.into_iter().map(Into::into).collect(),
      target: target.into(),
      target_scope: "page".to_string(),
      source_scope: "page".to_string(),
    }
  }

  /// Set the target scope
  pub fn target_scope(mut self, scope: impl Into<String>) -> Self {
    self.target_scope = scope.into();
    self
  }

  /// Set the source scope
  pub fn source_scope(mut self, scope: impl Into<String>) -> Self {
    self.source_scope = scope.into();
    self
  }
}

/// `linking_root_domains` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkingRootDomainsParams {
  /// Page, subdomain or root domain being linked to
  pub target: String,
  /// Scope of the target (default `page`)
  pub target_scope: String,
  /// Sort order (default `source_domain_authority`, `None` leaves it to the service)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sort: Option<String>,
  /// Link filter (default `external`)
  pub filter: String,
  /// Only links first seen on or after this date
  #[serde(skip_serializing_if = "Option::is_none")]
  pub begin_date: Option<String>,
  /// Only links first seen on or before this date
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date: Option<String>,
  /// Page size (default 50)
  pub limit: u32,
  /// Token from a previous page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_token: Option<String>,
}

impl LinkingRootDomainsParams {
  /// Parameters for `target` with the service defaults
  pub fn new(target: impl Into<String>) -> Self {
    Self {
      target: target.into(),
      target_scope: "page".to_string(),
      sort: Some("source_domain_authority".to_string()),
      filter: "external".to_string(),
      begin_date: None,
      end_date: None,
      limit: default_limit(),
      next_token: None,
    }
  }

  /// Set the target scope
  pub fn target_scope(mut self, scope: impl Into<String>) -> Self {
    self.target_scope = scope.into();
    self
  }

  /// Set the sort order
  pub fn sort(mut self, sort: impl Into<String>) -> Self {
    self.sort = Some(sort.into());
    self
  }

  /// Drop the sort field so the service picks its own
  pub fn without_sort(mut self) -> Self {
    self.sort = None;
    self
  }

  /// Set the link filter
  pub fn filter(mut self, filter: impl Into<String>) -> Self {
    self.filter = filter.into();
    self
  }

  /// Set the begin date as sent (free form)
  pub fn begin_date(mut self, date: impl Into<String>) -> Self {
    self.begin_date = Some(date.into());
    self
  }

  /// Set the end date as sent (free form)
  pub fn end_date(mut self, date: impl Into<String>) -> Self {
    self.end_date = Some(date.into());
    self
  }

  /// Set both dates from calendar dates, formatted `YYYY-MM-DD`
  pub fn date_range(self, begin: NaiveDate, end: NaiveDate) -> Self {
    self
      .begin_date(begin.format(DATE_FORMAT).to_string())
      .end_date(end.format(DATE_FORMAT).to_string())
  }

  /// Set the page size
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = limit;
    self
  }
}

/// `links` request (detailed backlink listing)
///
/// `anchor_text`, `source_root_domain` and `source_scope` are always sent,
/// as `null` when unset, and `subdomains_limited_to_one` is always sent as a
/// list. Older clients have always sent these keys and the service accepts
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkMetricsParams {
  /// Page, subdomain or root domain being linked to
  pub target: String,
  /// Scope of the target (default `subdomain`)
  pub target_scope: String,
  /// Sort order
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sort: Option<String>,
  /// Link filter (default `all`)
  pub filter: String,
  /// Only links with this anchor text
  pub anchor_text: Option<String>,
  /// Only links from this root domain
  pub source_root_domain: Option<String>,
  /// Scope of the sources
  pub source_scope: Option<String>,
  /// Subdomains to return at most one link from
  pub subdomains_limited_to_one: Vec<String>,
  /// Page size (default 50)
  pub limit: u32,
  /// Token from a previous page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_token: Option<String>,
}

impl LinkMetricsParams {
  /// Parameters for `target` with the service defaults
  pub fn new(target: impl Into<String>) -> Self {
    Self {
      target: target.into(),
      target_scope: "subdomain".to_string(),
      sort: None,
      filter: "all".to_string(),
      anchor_text: None,
      source_root_domain: None,
      source_scope: None,
      subdomains_limited_to_one: Vec::new(),
      limit: default_limit(),
      next_token: None,
    }
  }

  /// Set the target scope
  pub fn target_scope(mut self, scope: impl Into<String>) -> Self {
    self.target_scope = scope.into();
    self
  }

  /// Set the sort order
  pub fn sort(mut self, sort: impl Into<String>) -> Self {
    self.sort = Some(sort.into());
    self
  }

  /// Set the link filter
  pub fn filter(mut self, filter: impl Into<String>) -> Self {
    self.filter = filter.into();
    self
  }

  /// Only links with this anchor text
  pub fn anchor_text(mut self, text: impl Into<String>) -> Self {
    self.anchor_text = Some(text.into());
    self
  }

  /// Only links from this root domain
  pub fn source_root_domain(mut self, domain: impl Into<String>) -> Self {
    self.source_root_domain = Some(domain.into());
    self
  }

  /// Set the source scope
  pub fn source_scope(mut self, scope: impl Into<String>) -> Self {
    self.source_scope = Some(scope.into());
    self
  }

  /// Return at most one link from each of these subdomains
  pub fn subdomains_limited_to_one<I, S>(mut self, subdomains: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.subdomains_limited_to_one = subdomains.into_iter().map(Into::into).collect();
    self
  }

  /// Set the page size
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = limit;
    self
  }
}

impl_paginated!(AnchorTextParams, LinkingRootDomainsParams, LinkMetricsParams);
