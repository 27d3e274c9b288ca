use anyhow::Result;
use ferryscraper::{clean, fetch, store};
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let raw_path = PathBuf::from("data/aogashima_ship_arrivals.csv");
    let clean_path = PathBuf::from("data/aogashima_ship_arrivals_clean.csv");

    // ─── 2) crawl the monthly status pages ───────────────────────────
    let client = Client::new();
    let records = fetch::collect_records(&client).await?;
    info!(rows = records.len(), "fetched raw records");
    store::write_raw_csv(&raw_path, &records)?;
    info!("wrote raw CSV to {}", raw_path.display());

    // ─── 3) normalize and persist ────────────────────────────────────
    let (cleaned, stats) = clean::clean_records(&records)?;
    store::write_clean_csv(&clean_path, &cleaned)?;
    info!(rows = cleaned.len(), "wrote clean CSV to {}", clean_path.display());

    // ─── 4) validation summary ───────────────────────────────────────
    stats.print_summary();
    println!("Wrote cleaned data to: {}", clean_path.display());

    Ok(())
}
