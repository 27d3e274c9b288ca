//! Cancellation-probability model over wind speed.

pub mod logistic;
pub mod metrics;
pub mod split;

use anyhow::{ensure, Result};

pub use logistic::LogisticModel;

use crate::types::{CleanRecord, Route, Status};

/// Wind speeds (m/s) at which the report samples the fitted probability.
pub const SPEED_CHECKPOINTS: [f64; 7] = [0.0, 3.0, 5.0, 7.0, 9.0, 12.0, 15.0];

/// `(speed, label)` pairs for one route: 0 = operational, 1 = canceled.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub speeds: Vec<f64>,
    pub labels: Vec<u8>,
}

/// Extract the usable pairs for `route`. Rows with an unknown status or a
/// blank/unparseable speed are skipped; they carry no signal for the fit.
pub fn load_dataset(records: &[CleanRecord], route: Route) -> Dataset {
    let mut dataset = Dataset::default();
    for record in records {
        let label = match record.status_for(route) {
            Status::Operational => 0,
            Status::Canceled => 1,
            Status::Unknown => continue,
        };
        let Ok(speed) = record.wind_speed.trim().parse::<f64>() else {
            continue;
        };
        dataset.speeds.push(speed);
        dataset.labels.push(label);
    }
    dataset
}

/// Everything the regression report needs.
#[derive(Debug, Clone)]
pub struct FitSummary {
    pub model: LogisticModel,
    pub test_accuracy: f64,
    pub roc_auc: Option<f64>,
    /// `(speed, P(canceled))` at each checkpoint.
    pub checkpoints: Vec<(f64, f64)>,
}

/// Split, fit on the training partition, and evaluate on the held-out one.
pub fn train_and_evaluate(dataset: &Dataset, test_fraction: f64, seed: u64) -> Result<FitSummary> {
    ensure!(
        !dataset.speeds.is_empty(),
        "no usable rows: need a known operational/canceled status and a wind speed"
    );

    let parts = split::stratified_split(&dataset.speeds, &dataset.labels, test_fraction, seed);
    let model = logistic::fit(&parts.train_speeds, &parts.train_labels)?;

    let probs: Vec<f64> = parts.test_speeds.iter().map(|&s| model.predict_proba(s)).collect();
    let preds: Vec<u8> = parts.test_speeds.iter().map(|&s| model.predict(s)).collect();

    Ok(FitSummary {
        model,
        test_accuracy: metrics::accuracy(&parts.test_labels, &preds),
        roc_auc: metrics::roc_auc(&parts.test_labels, &probs),
        checkpoints: SPEED_CHECKPOINTS
            .iter()
            .map(|&s| (s, model.predict_proba(s)))
            .collect(),
    })
}

/// Print the regression report for one route.
pub fn print_summary(route: Route, summary: &FitSummary) {
    println!("--- Logistic regression on wind speed ({} route) ---", route);
    println!("Test accuracy: {:.3}", summary.test_accuracy);
    match summary.roc_auc {
        Some(auc) => println!("ROC-AUC: {:.3}", auc),
        None => println!("ROC-AUC: n/a (single-class test set)"),
    }
    println!(
        "Model coefficients: speed={:.3}, intercept={:.3}",
        summary.model.coef, summary.model.intercept
    );
    println!("Estimated cancellation probability by wind speed:");
    for (speed, prob) in &summary.checkpoints {
        println!("  {:>4.0} m/s: {:5.1}%", speed, prob * 100.0);
    }
}
