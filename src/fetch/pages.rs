use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use tokio::time::sleep;
use tracing::{debug, error, warn};
use url::Url;

use crate::types::RawRecord;

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 500;

async fn get_text_core(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching text from {}", url);
    Ok(client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))?)
}

/// Fetch one monthly page, retrying transient failures with exponential
/// backoff before giving up.
pub async fn fetch_month_html(client: &Client, url: &Url) -> Result<String> {
    let mut attempts = 0;
    loop {
        match get_text_core(client, url).await {
            Ok(html) => return Ok(html),
            Err(e) if attempts < MAX_RETRIES => {
                attempts += 1;
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempts - 1);
                warn!(%url, attempt = attempts, delay_ms = backoff, error = %e, "Retrying");
                sleep(Duration::from_millis(backoff)).await;
            }
            Err(e) => {
                error!(%url, error = %e, "Exhausted retries");
                return Err(e);
            }
        }
    }
}

/// Extract the daily rows from a monthly page.
///
/// The schedule lives in the first `<table>`; its first two `<tr>` are
/// header rows. Each data row carries at least four cells: date, to-island
/// status, from-island status, max wind. Shorter rows (separators, notes)
/// are skipped. A page without a table yields no records.
pub fn parse_month_table(html: &str) -> Vec<RawRecord> {
    let table_sel = Selector::parse("table").expect("CSS selector for tables should be valid");
    let row_sel = Selector::parse("tr").expect("CSS selector for rows should be valid");
    let cell_sel = Selector::parse("th, td").expect("CSS selector for cells should be valid");

    let doc = Html::parse_document(html);
    let table = match doc.select(&table_sel).next() {
        Some(table) => table,
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    for row in table.select(&row_sel).skip(2) {
        let cells: Vec<String> = row
            .select(&cell_sel)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();
        if cells.len() < 4 {
            continue;
        }
        records.push(RawRecord {
            date: cells[0].clone(),
            to_aogashima: cells[1].clone(),
            from_aogashima: cells[2].clone(),
            max_wind: cells[3].clone(),
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTH_PAGE: &str = r#"<html><body>
        <table>
          <tr><th colspan="4">2021年3月</th></tr>
          <tr><th>日付</th><th>還住丸(青ヶ島行)</th><th>還住丸(八丈島行)</th><th>最大風速</th></tr>
          <tr><td>2021/03/01 (月)</td><td>〇</td><td>〇</td><td>北 12.0</td></tr>
          <tr><td colspan="4">点検のため欠航</td></tr>
          <tr><td>2021/03/02 (火)</td><td>×</td><td></td><td>北北東 9.5 )</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn header_rows_and_short_rows_are_skipped() {
        let records = parse_month_table(MONTH_PAGE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2021/03/01 (月)");
        assert_eq!(records[0].max_wind, "北 12.0");
        assert_eq!(records[1].to_aogashima, "×");
        assert_eq!(records[1].from_aogashima, "");
    }

    #[test]
    fn page_without_a_table_yields_nothing() {
        assert!(parse_month_table("<html><body><p>not yet</p></body></html>").is_empty());
    }
}
