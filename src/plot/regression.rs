//! Fitted-curve page: data points at y ∈ {0, 1} plus the predicted
//! cancellation probability across the observed speed range.

use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};

use crate::model::{Dataset, LogisticModel};
use crate::plot::{write_html, PLOTLY_CDN};

const CURVE_SAMPLES: usize = 200;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <title>風速による欠航確率</title>
  <script src="__PLOTLY_CDN__"></script>
  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; padding: 16px; }
  </style>
</head>
<body>
  <h1 style="margin-top:0;">風速による欠航確率</h1>
  <div id="wind-regression"></div>
  <script>
    Plotly.newPlot("wind-regression", __TRACES_JSON__, __LAYOUT_JSON__);
  </script>
</body>
</html>
"#;

fn traces_json(dataset: &Dataset, model: &LogisticModel) -> Value {
    let operational: Vec<f64> = dataset
        .speeds
        .iter()
        .zip(&dataset.labels)
        .filter(|(_, &label)| label == 0)
        .map(|(&s, _)| s)
        .collect();
    let canceled: Vec<f64> = dataset
        .speeds
        .iter()
        .zip(&dataset.labels)
        .filter(|(_, &label)| label == 1)
        .map(|(&s, _)| s)
        .collect();

    let xmin = dataset.speeds.iter().cloned().fold(f64::INFINITY, f64::min);
    let xmax = dataset.speeds.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let step = (xmax - xmin) / (CURVE_SAMPLES - 1) as f64;
    let xs: Vec<f64> = (0..CURVE_SAMPLES).map(|i| xmin + step * i as f64).collect();
    let probs: Vec<f64> = xs.iter().map(|&x| model.predict_proba(x)).collect();

    json!([
        {
            "x": operational,
            "y": vec![0.0; operational.len()],
            "mode": "markers",
            "name": "operational",
            "marker": {"color": "#1f77b4", "symbol": "circle", "opacity": 0.45},
            "hovertemplate": "speed=%{x:.1f} m/s<br>status=operational<extra></extra>",
        },
        {
            "x": canceled,
            "y": vec![1.0; canceled.len()],
            "mode": "markers",
            "name": "canceled",
            "marker": {"color": "#d62728", "symbol": "x", "opacity": 0.6},
            "hovertemplate": "speed=%{x:.1f} m/s<br>status=canceled<extra></extra>",
        },
        {
            "x": xs,
            "y": probs,
            "mode": "lines",
            "name": "predicted P(canceled)",
            "line": {"color": "#222", "width": 3},
            "hovertemplate": "speed=%{x:.1f} m/s<br>P(canceled)=%{y:.2f}<extra></extra>",
        },
    ])
}

fn layout_json() -> Value {
    json!({
        "title": {"text": "風速による欠航確率（ロジスティック回帰）"},
        "xaxis": {"title": {"text": "風速 (m/s)"}},
        "yaxis": {"title": {"text": "P(canceled)"}, "range": [-0.05, 1.05]},
        "legend": {"orientation": "h", "yanchor": "bottom", "y": 1.02, "xanchor": "right", "x": 1},
        "height": 520,
    })
}

pub fn render_regression_page(dataset: &Dataset, model: &LogisticModel) -> String {
    TEMPLATE
        .replace("__PLOTLY_CDN__", PLOTLY_CDN)
        .replace("__TRACES_JSON__", &traces_json(dataset, model).to_string())
        .replace("__LAYOUT_JSON__", &layout_json().to_string())
}

pub fn write_regression_page(path: &Path, dataset: &Dataset, model: &LogisticModel) -> Result<()> {
    write_html(path, &render_regression_page(dataset, model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_points_and_curve() {
        let dataset = Dataset {
            speeds: vec![3.0, 4.0, 12.0, 13.0],
            labels: vec![0, 0, 1, 1],
        };
        let model = LogisticModel { intercept: -6.0, coef: 0.8 };
        let page = render_regression_page(&dataset, &model);

        assert!(!page.contains("__"), "unreplaced placeholder left in page");
        assert!(page.contains("wind-regression"));
        assert!(page.contains("predicted P(canceled)"));
        assert!(page.contains(PLOTLY_CDN));
    }
}
