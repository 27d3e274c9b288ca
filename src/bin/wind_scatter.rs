//! Render the interactive wind-vector scatter page from the cleaned CSV.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use ferryscraper::{plot, store};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn print_usage_and_exit(program: &str) -> ! {
    eprintln!("Usage: {} [input-clean-csv] [output-html]", program);
    std::process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") || args.len() > 3 {
        print_usage_and_exit(&args[0]);
    }
    let input = PathBuf::from(
        args.get(1).map(String::as_str).unwrap_or("data/aogashima_ship_arrivals_clean.csv"),
    );
    let output = PathBuf::from(
        args.get(2).map(String::as_str).unwrap_or("plots/wind_scatter_interactive.html"),
    );

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    let records = store::read_clean_csv(&input)?;
    info!(rows = records.len(), "read clean CSV from {}", input.display());

    plot::scatter::write_scatter_page(&output, &records)?;
    println!("Saved: {}", output.display());
    Ok(())
}
