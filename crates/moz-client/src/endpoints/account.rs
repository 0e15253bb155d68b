//! Index and account endpoints. Both send an empty JSON object.

use super::{endpoint_group, EndpointBase};
use moz_core::{Endpoint, Result};
use moz_models::EmptyParams;
use serde_json::Value;
use tracing::instrument;

endpoint_group!(
  /// Index metadata and quota usage
  AccountEndpoints
);

impl AccountEndpoints {
  /// Identifier that changes whenever the index data changes
  #[instrument(skip(self))]
  pub async fn index_metadata(&self) -> Result<Value> {
    self.dispatch(Endpoint::IndexMetadata, &EmptyParams::default()).await
  }

  /// Rows consumed so far in the current billing period
  ///
  /// May lag by up to an hour, and counts rows used by both the v1 and v2
  /// Links APIs.
  #[instrument(skip(self))]
  pub async fn usage_data(&self) -> Result<Value> {
    self.dispatch(Endpoint::UsageData, &EmptyParams::default()).await
  }
}
