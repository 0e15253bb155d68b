//! URL and site metric endpoints

use super::{endpoint_group, EndpointBase};
use moz_core::{Endpoint, Result};
use moz_models::{FinalRedirectParams, TopPagesParams, UrlMetricsParams};
use serde_json::Value;
use tracing::instrument;

endpoint_group!(
  /// Per-URL and per-site metric endpoints
  MetricsEndpoints
);

impl MetricsEndpoints {
  /// Authority and link metrics for one or more URLs
  ///
  /// `url_metrics` is a weighted endpoint; requesting history or
  /// distributions multiplies the rows consumed.
  pub async fn url_metrics(&self, targets: &[&str]) -> Result<Value> {
    self.url_metrics_with_options(&UrlMetricsParams::new(targets.iter().copied())).await
  }

  /// URL metrics with history selections and distributions
  #[instrument(skip(self, params), fields(targets = params.targets.len(), distributions = params.distributions))]
  pub async fn url_metrics_with_options(&self, params: &UrlMetricsParams) -> Result<Value> {
    self.dispatch(Endpoint::UrlMetrics, params).await
  }

  /// Top pages of a site by page authority
  pub async fn top_pages(&self, target: &str) -> Result<Value> {
    self.top_pages_with_options(&TopPagesParams::new(target)).await
  }

  /// Top pages with full options
  #[instrument(skip(self, params), fields(target = %params.target, sort = %params.sort, limit = params.limit))]
  pub async fn top_pages_with_options(&self, params: &TopPagesParams) -> Result<Value> {
    self.dispatch(Endpoint::TopPages, params).await
  }

  /// Final redirect target of `page`
  ///
  /// The service answers with an empty body when it knows of no redirect,
  /// which comes back as `Value::Null`.
  #[instrument(skip(self))]
  pub async fn final_redirect(&self, page: &str) -> Result<Value> {
    self.dispatch(Endpoint::FinalRedirect, &FinalRedirectParams::new(page)).await
  }
}
