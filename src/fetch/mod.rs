//! Scraping of the monthly ferry-status pages.

pub mod pages;
pub mod urls;

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::types::RawRecord;

/// Politeness delay between monthly page requests.
const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Crawl every month in the configured range, oldest first.
///
/// A month that fails even after retries is logged and skipped; the crawl
/// continues with the remaining months.
pub async fn collect_records(client: &Client) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for ym in urls::iter_year_months(urls::START, urls::END) {
        let url = urls::month_url(ym)?;
        info!(month = %ym, "fetching");
        let html = match pages::fetch_month_html(client, &url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(month = %ym, error = %e, "skipping month");
                continue;
            }
        };

        let monthly = pages::parse_month_table(&html);
        if monthly.is_empty() {
            warn!(month = %ym, "no daily rows on page");
        } else {
            info!(month = %ym, rows = monthly.len(), "parsed");
            records.extend(monthly);
        }
        sleep(PAGE_DELAY).await;
    }
    Ok(records)
}
