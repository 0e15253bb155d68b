//! Index-wide top lists

use super::{endpoint_group, EndpointBase};
use moz_core::{Endpoint, Result};
use moz_models::GlobalTopParams;
use serde_json::Value;
use tracing::instrument;

endpoint_group!(
  /// Index-wide top pages and root domains (top 500 of each)
  GlobalEndpoints
);

impl GlobalEndpoints {
  /// First page of the top pages in the index, by page authority
  pub async fn top_pages(&self) -> Result<Value> {
    self.top_pages_with_options(&GlobalTopParams::default()).await
  }

  /// Top pages with a custom page size or pagination token
  #[instrument(skip(self, params), fields(limit = params.limit, paged = params.next_token.is_some()))]
  pub async fn top_pages_with_options(&self, params: &GlobalTopParams) -> Result<Value> {
    self.dispatch(Endpoint::GlobalTopPages, params).await
  }

  /// First page of the top root domains in the index, by domain authority
  pub async fn top_root_domains(&self) -> Result<Value> {
    self.top_root_domains_with_options(&GlobalTopParams::default()).await
  }

  /// Top root domains with a custom page size or pagination token
  #[instrument(skip(self, params), fields(limit = params.limit, paged = params.next_token.is_some()))]
  pub async fn top_root_domains_with_options(&self, params: &GlobalTopParams) -> Result<Value> {
    self.dispatch(Endpoint::GlobalTopRootDomains, params).await
  }
}
