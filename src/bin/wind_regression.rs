//! Fit the wind-speed cancellation model for one route, print the report,
//! and render the fitted-curve page.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use ferryscraper::types::Route;
use ferryscraper::{model, plot, store};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

struct Args {
    input: PathBuf,
    route: Route,
    test_size: f64,
    seed: u64,
    plot_output: Option<PathBuf>,
}

fn print_usage_and_exit(program: &str) -> ! {
    eprintln!(
        "Usage: {} [--input <clean-csv>] [--route to|from] [--test-size <fraction>] \
         [--seed <n>] [--plot-output <html>]",
        program
    );
    std::process::exit(1);
}

fn parse_args() -> Result<Args> {
    let argv: Vec<String> = env::args().collect();
    let mut args = Args {
        input: PathBuf::from("data/aogashima_ship_arrivals_clean.csv"),
        route: Route::To,
        test_size: 0.2,
        seed: 42,
        plot_output: None,
    };

    let mut iter = argv.iter().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "-h" | "--help" => print_usage_and_exit(&argv[0]),
            "--input" => match iter.next() {
                Some(v) => args.input = PathBuf::from(v),
                None => print_usage_and_exit(&argv[0]),
            },
            "--route" => match iter.next().and_then(|v| Route::parse(v)) {
                Some(route) => args.route = route,
                None => print_usage_and_exit(&argv[0]),
            },
            "--test-size" => match iter.next().and_then(|v| v.parse().ok()) {
                Some(f) if (0.0..1.0).contains(&f) => args.test_size = f,
                _ => print_usage_and_exit(&argv[0]),
            },
            "--seed" => match iter.next().and_then(|v| v.parse().ok()) {
                Some(seed) => args.seed = seed,
                None => print_usage_and_exit(&argv[0]),
            },
            "--plot-output" => match iter.next() {
                Some(v) => args.plot_output = Some(PathBuf::from(v)),
                None => print_usage_and_exit(&argv[0]),
            },
            other => bail!("unknown argument: {}", other),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    let records = store::read_clean_csv(&args.input)?;
    info!(rows = records.len(), "read clean CSV from {}", args.input.display());

    let dataset = model::load_dataset(&records, args.route);
    let summary = model::train_and_evaluate(&dataset, args.test_size, args.seed)?;
    model::print_summary(args.route, &summary);

    let plot_path = args
        .plot_output
        .unwrap_or_else(|| PathBuf::from(format!("plots/wind_regression_{}.html", args.route)));
    plot::regression::write_regression_page(&plot_path, &dataset, &summary.model)?;
    println!("Saved plot: {}", plot_path.display());
    Ok(())
}
