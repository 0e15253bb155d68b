//! Payloads for the per-URL and per-site metric operations

use crate::common::{default_limit, impl_paginated};
use serde::Serialize;

/// Historical metric selection shared by `top_pages` and `url_metrics`.
///
/// All four lists are always sent, empty when nothing is requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoryFields {
  /// Metrics to return day-over-day deltas for
  pub daily_history_deltas: Vec<String>,
  /// Metrics to return daily values for
  pub daily_history_values: Vec<String>,
  /// Metrics to return month-over-month deltas for
  pub monthly_history_deltas: Vec<String>,
  /// Metrics to return monthly values for
  pub monthly_history_values: Vec<String>,
}

fn to_strings<I, S>(items: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  items.into_iter().map(Into::into).collect()
}

/// Adds the four history setters to a struct with a `history: HistoryFields` field
macro_rules! impl_history_setters {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Request daily deltas for these metrics
      pub fn daily_history_deltas<I, S>(mut self, metrics: I) -> Self
      where
        I: IntoIterator<Item = S>,
        S: Into<String>,
      {
        self.history.daily_history_deltas = to_strings(metrics);
        self
      }

      /// Request daily values for these metrics
      pub fn daily_history_values<I, S>(mut self, metrics: I) -> Self
      where
        I: IntoIterator<Item = S>,
        S: Into<String>,
      {
        self.history.daily_history_values = to_strings(metrics);
        self
      }

      /// Request monthly deltas for these metrics
      pub fn monthly_history_deltas<I, S>(mut self, metrics: I) -> Self
      where
        I: IntoIterator<Item = S>,
        S: Into<String>,
      {
        self.history.monthly_history_deltas = to_strings(metrics);
        self
      }

      /// Request monthly values for these metrics
      pub fn monthly_history_values<I, S>(mut self, metrics: I) -> Self
      where
        I: IntoIterator<Item = S>,
        S: Into<String>,
      {
        self.history.monthly_history_values = to_strings(metrics);
        self
      }
    }
  };
}

/// `final_redirect` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalRedirectParams {
  /// Page whose redirect chain should be resolved
  pub page: String,
}

impl FinalRedirectParams {
  /// Parameters for `page`
  pub fn new(page: impl Into<String>) -> Self {
    Self { page: page.into() }
  }
}

/// `top_pages` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPagesParams {
  /// Site to list pages for
  pub target: String,
  /// Scope of the target (default `subdomain`)
  pub scope: String,
  /// Sort order (default `page_authority`)
  pub sort: String,
  /// Page filter (default `all`)
  pub filter: String,
  /// History selections, always sent
  #[serde(flatten)]
  pub history: HistoryFields,
  /// Page size (default 50)
  pub limit: u32,
  /// Token from a previous page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_token: Option<String>,
}

impl TopPagesParams {
  /// Parameters for `target` with the service defaults
  pub fn new(target: impl Into<String>) -> Self {
    Self {
      target: target.into(),
      scope: "subdomain".to_string(),
      sort: "page_authority".to_string(),
      filter: "all".to_string(),
      history: HistoryFields::default(),
      limit: default_limit(),
      next_token: None,
    }
  }

  /// Set the target scope
  pub fn scope(mut self, scope: impl Into<String>) -> Self {
    self.scope = scope.into();
    self
  }

  /// Set the sort order
  pub fn sort(mut self, sort: impl Into<String>) -> Self {
    self.sort = sort.into();
    self
  }

  /// Set the page filter
  pub fn filter(mut self, filter: impl Into<String>) -> Self {
    self.filter = filter.into();
    self
  }

  /// Set the page size
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = limit;
    self
  }
}

/// `url_metrics` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlMetricsParams {
  /// URLs, subdomains or root domains to look up
  pub targets: Vec<String>,
  /// History selections, always sent
  #[serde(flatten)]
  pub history: HistoryFields,
  /// Include metric distributions (default false)
  pub distributions: bool,
}

impl UrlMetricsParams {
  /// Parameters for one or more targets
  pub fn new<I, S>(targets: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self { targets: to_strings(targets), history: HistoryFields::default(), distributions: false }
  }

  /// Ask for metric distributions
  pub fn distributions(mut self, distributions: bool) -> Self {
    self.distributions = distributions;
    self
  }
}

impl_history_setters!(TopPagesParams);
impl_history_setters!(UrlMetricsParams);
impl_paginated!(TopPagesParams);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::{encode_payload, Paginated};
  use serde_json::{json, Value};

  #[test]
  fn test_final_redirect() {
    assert_eq!(
      encode_payload(&FinalRedirectParams::new("seomoz.org/blog")).unwrap(),
      r#"{"page":"seomoz.org/blog"}"#
    );
  }

  #[test]
  fn test_top_pages_defaults() {
    let body = encode_payload(&TopPagesParams::new("moz.com")).unwrap();
    assert_eq!(
      body,
      concat!(
        r#"{"target":"moz.com","scope":"subdomain","sort":"page_authority","filter":"all","#,
        r#""daily_history_deltas":[],"daily_history_values":[],"monthly_history_deltas":[],"monthly_history_values":[],"#,
        r#""limit":50}"#
      )
    );
  }

  #[test]
  fn test_top_pages_with_history_and_token() {
    let params = TopPagesParams::new("moz.com")
      .scope("root_domain")
      .monthly_history_values(["page_authority"])
      .limit(3)
      .next_token("page-2");
    let body: Value = serde_json::from_str(&encode_payload(&params).unwrap()).unwrap();
    assert_eq!(body["scope"], "root_domain");
    assert_eq!(body["monthly_history_values"], json!(["page_authority"]));
    assert_eq!(body["daily_history_deltas"], json!([]));
    assert_eq!(body["next_token"], "page-2");
  }

  #[test]
  fn test_url_metrics_defaults() {
    let body: Value =
      serde_json::from_str(&encode_payload(&UrlMetricsParams::new(["moz.com", "moz.com/blog"])).unwrap())
        .unwrap();
    assert_eq!(
      body,
      json!({
        "targets": ["moz.com", "moz.com/blog"],
        "daily_history_deltas": [],
        "daily_history_values": [],
        "monthly_history_deltas": [],
        "monthly_history_values": [],
        "distributions": false
      })
    );
  }

  #[test]
  fn test_url_metrics_distributions() {
    let params = UrlMetricsParams::new(["moz.com"]).distributions(true).daily_history_deltas(["domain_authority"]);
    let body: Value = serde_json::from_str(&encode_payload(&params).unwrap()).unwrap();
    assert_eq!(body["distributions"], true);
    assert_eq!(body["daily_history_deltas"], json!(["domain_authority"]));
  }
}
