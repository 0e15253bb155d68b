//! Link graph endpoints
//!
//! This module covers the backlink side of the Moz Links API:
//! - Anchor text distribution for a target
//! - Link intersect across competitor targets
//! - Link status between many sources and one target
//! - Linking root domains and the detailed backlink listing
//!
//! `link_intersect` and `link_status` are weighted endpoints: one returned
//! row may consume more than one row of quota.

use super::{endpoint_group, EndpointBase};
use moz_core::{Endpoint, Result};
use moz_models::{
  AnchorTextParams, LinkIntersectParams, LinkMetricsParams, LinkStatusParams,
  LinkingRootDomainsParams,
};
use serde_json::Value;
use tracing::instrument;

endpoint_group!(
  /// Link graph endpoints
  LinksEndpoints
);

impl LinksEndpoints {
  /// Anchor text metrics for followed external links to `target`
  ///
  /// Results are ordered by `external_root_domains`, descending.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use moz_client::MozClient;
  /// # async fn run(client: MozClient) -> moz_client::Result<()> {
  /// let anchors = client.links().anchor_text("moz.com/blog").await?;
  /// for row in anchors["results"].as_array().into_iter().flatten() {
  ///     println!("{} ({})", row["anchor_text"], row["external_root_domains"]);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  pub async fn anchor_text(&self, target: &str) -> Result<Value> {
    self.anchor_text_with_options(&AnchorTextParams::new(target)).await
  }

  /// Anchor text metrics with full options
  #[instrument(skip(self, params), fields(target = %params.target, scope = %params.scope, limit = params.limit))]
  pub async fn anchor_text_with_options(&self, params: &AnchorTextParams) -> Result<Value> {
    self.dispatch(Endpoint::AnchorText, params).await
  }

  /// Sources linking to at least one of `positive_targets`
  pub async fn link_intersect(&self, positive_targets: &[&str]) -> Result<Value> {
    self.link_intersect_with_options(&LinkIntersectParams::new(positive_targets.iter().copied())).await
  }

  /// Link intersect with negative targets, matching threshold and sort
  #[instrument(skip(self, params), fields(positive = params.positive_targets.len(), negative = params.negative_targets.len()))]
  pub async fn link_intersect_with_options(&self, params: &LinkIntersectParams) -> Result<Value> {
    self.dispatch(Endpoint::LinkIntersect, params).await
  }

  /// Whether each of `sources` links to `target`
  pub async fn link_status(&self, sources: &[&str], target: &str) -> Result<Value> {
    self.link_status_with_options(&LinkStatusParams::new(sources.iter().copied(), target)).await
  }

  /// Link status with explicit target and source scopes
  #[instrument(skip(self, params), fields(sources = params.sources.len(), target = %params.target))]
  pub async fn link_status_with_options(&self, params: &LinkStatusParams) -> Result<Value> {
    self.dispatch(Endpoint::LinkStatus, params).await
  }

  /// Root domains linking to `target`
  pub async fn linking_root_domains(&self, target: &str) -> Result<Value> {
    self.linking_root_domains_with_options(&LinkingRootDomainsParams::new(target)).await
  }

  /// Linking root domains with sort, filter, date window and pagination
  #[instrument(skip(self, params), fields(target = %params.target, filter = %params.filter, limit = params.limit))]
  pub async fn linking_root_domains_with_options(
    &self,
    params: &LinkingRootDomainsParams,
  ) -> Result<Value> {
    self.dispatch(Endpoint::LinkingRootDomains, params).await
  }

  /// Detailed backlink listing for `target`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use moz_client::{MozClient, LinkMetricsParams, Paginated, next_token_of};
  /// # async fn run(client: MozClient) -> moz_client::Result<()> {
  /// let params = LinkMetricsParams::new("moz.com").filter("external+follow").limit(25);
  /// let first = client.links().link_metrics_with_options(&params).await?;
  ///
  /// if let Some(token) = next_token_of(&first) {
  ///     let second = client.links().link_metrics_with_options(&params.clone().next_token(token)).await?;
  ///     println!("{}", second);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  pub async fn link_metrics(&self, target: &str) -> Result<Value> {
    self.link_metrics_with_options(&LinkMetricsParams::new(target)).await
  }

  /// Backlink listing with full options
  #[instrument(skip(self, params), fields(target = %params.target, target_scope = %params.target_scope, limit = params.limit))]
  pub async fn link_metrics_with_options(&self, params: &LinkMetricsParams) -> Result<Value> {
    self.dispatch(Endpoint::Links, params).await
  }
}
