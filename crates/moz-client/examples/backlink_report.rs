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

//! Backlink report example
//!
//! Pulls a small competitive backlink picture for one domain:
//! - Domain authority and link counts
//! - Linking root domains first seen in the last 90 days
//! - Two pages of the backlink listing, following `next_token` by hand
//! - Quota used so far
//!
//! Reads `MOZ_ACCESS_ID` and `MOZ_SECRET_KEY` from the environment or `.env`.
//!
//! ```text
//! RUST_LOG=moz_client=debug cargo run -p moz-client --example backlink_report -- moz.com
//! ```

use anyhow::Context;
use chrono::{Duration, Utc};
use moz_client::{
  next_token_of, Config, LinkMetricsParams, LinkingRootDomainsParams, MozClient, Paginated,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const PAGES: usize = 2;

fn rows(response: &Value) -> &[Value] {
  response["results"].as_array().map(Vec::as_slice).unwrap_or(&[])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let target = std::env::args().nth(1).unwrap_or_else(|| "moz.com".to_string());
  let config = Config::from_env().context("MOZ_ACCESS_ID and MOZ_SECRET_KEY must be set")?;
  let client = MozClient::new(config)?;

  let metrics = client.metrics().url_metrics(&[target.as_str()]).await?;
  if let Some(row) = rows(&metrics).first() {
    println!("== {} ==", target);
    println!("Domain authority:  {}", row["domain_authority"]);
    println!("Page authority:    {}", row["page_authority"]);
    println!("Linking domains:   {}", row["root_domains_to_root_domain"]);
  }

  let today = Utc::now().date_naive();
  let recent = LinkingRootDomainsParams::new(target.as_str())
    .target_scope("root_domain")
    .date_range(today - Duration::days(90), today)
    .limit(10);
  let domains = client.links().linking_root_domains_with_options(&recent).await?;
  println!("\nNew linking root domains (90 days):");
  for row in rows(&domains) {
    println!("  {:<40} DA {}", row["root_domain"].as_str().unwrap_or("?"), row["domain_authority"]);
  }

  let params = LinkMetricsParams::new(target.as_str()).filter("external+follow").limit(25);
  let mut page = client.links().link_metrics_with_options(&params).await?;
  println!("\nBacklinks:");
  for n in 1..=PAGES {
    for row in rows(&page) {
      println!("  {} -> {}", row["source"]["page"], row["target"]["page"]);
    }
    let Some(token) = next_token_of(&page).map(str::to_string) else { break };
    if n == PAGES {
      break;
    }
    page = client.links().link_metrics_with_options(&params.clone().next_token(token)).await?;
  }

  let usage = client.account().usage_data().await?;
  println!("\nRows consumed this period: {}", usage["rows_consumed"]);

  Ok(())
}
