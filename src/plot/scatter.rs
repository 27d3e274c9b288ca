//! Interactive wind-vector scatter: one trace per status bucket, filterable
//! client-side by status checkboxes and a month selector, with a data table
//! of the plotted rows alongside.

use std::path::Path;

use anyhow::Result;
use serde_json::{json, Value};

use crate::plot::{write_html, PLOTLY_CDN};
use crate::types::{CleanRecord, Status};
use crate::vector::{StatusBucket, VectorBuckets, WindVector};

/// Marker style per status bucket, in trace order.
const STATUS_STYLE: [(Status, &str, &str); 3] = [
    (Status::Operational, "circle", "#1f77b4"),
    (Status::Canceled, "x", "#d62728"),
    (Status::Unknown, "cross", "#7f7f7f"),
];

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <title>最大風速ベクトル散布図</title>
  <script src="__PLOTLY_CDN__"></script>
  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; padding: 16px; }
    .controls { margin-bottom: 12px; display: flex; gap: 12px; align-items: center; flex-wrap: wrap; }
    label { margin-right: 8px; }
    .layout { display: flex; gap: 16px; align-items: flex-start; }
    .chart-col { flex: 2; min-width: 400px; }
    .table-col { flex: 1; min-width: 320px; }
    .table-container { max-height: 760px; overflow: auto; border: 1px solid #ddd; border-radius: 6px; }
    table { width: 100%; border-collapse: collapse; font-size: 12px; }
    th, td { padding: 6px 8px; border-bottom: 1px solid #eee; white-space: nowrap; }
    th { position: sticky; top: 0; background: #fafafa; z-index: 1; }
    tr:nth-child(even) td { background: #fcfcfc; }
  </style>
</head>
<body>
  <h1 style="margin-top:0;">最大風速ベクトル散布図</h1>
  <div class="controls">
    <label><input type="checkbox" data-trace="operational" checked> operational</label>
    <label><input type="checkbox" data-trace="canceled" checked> canceled</label>
    <label><input type="checkbox" data-trace="unknown" checked> unknown</label>
    <label>月:
      <select id="month-select">
        <option value="all" selected>all</option>
        __MONTH_OPTIONS__
      </select>
    </label>
  </div>
  <div class="layout">
    <div class="chart-col">
      <div id="wind-scatter"></div>
    </div>
    <div class="table-col">
      <div class="table-container">
        <table id="data-table">
          <thead>
            <tr>
              <th>日付</th>
              <th>曜</th>
              <th>to_status</th>
              <th>from_status</th>
              <th>風向</th>
              <th>風速(m/s)</th>
            </tr>
          </thead>
          <tbody></tbody>
        </table>
      </div>
    </div>
  </div>
  <script>
    const dataStore = __DATA_JSON__;
    const tableData = __TABLE_JSON__;
    const traceIndex = { operational: 0, canceled: 1, unknown: 2 };
    const monthSelect = document.getElementById("month-select");
    const tbody = document.querySelector("#data-table tbody");

    function getSelectedStatuses() {
      const selected = [];
      document.querySelectorAll('input[data-trace]').forEach(cb => {
        if (cb.checked) selected.push(cb.dataset.trace);
      });
      return selected;
    }

    function filterTraces(plot, month, statuses) {
      Object.keys(traceIndex).forEach(status => {
        const idx = traceIndex[status];
        const store = dataStore[status];
        const filteredX = [];
        const filteredY = [];
        for (let i = 0; i < store.month.length; i++) {
          if ((month === "all" || store.month[i] === month) && statuses.includes(status)) {
            filteredX.push(store.x[i]);
            filteredY.push(store.y[i]);
          }
        }
        Plotly.restyle(plot, {x: [filteredX], y: [filteredY]}, [idx]);
      });
    }

    function updateVisibility(plot, statuses) {
      const vis = Array(plot.data.length).fill(false);
      statuses.forEach(status => {
        vis[traceIndex[status]] = true;
      });
      Plotly.restyle(plot, 'visible', vis);
    }

    function renderTable(month, statuses) {
      tbody.innerHTML = "";
      const frag = document.createDocumentFragment();
      tableData.forEach(row => {
        if ((month === "all" || row.month === month) && statuses.includes(row.to_status)) {
          const tr = document.createElement("tr");
          ["date","weekday","to_status","from_status","max_wind_direction","max_wind_speed_mps"].forEach(key => {
            const td = document.createElement("td");
            td.textContent = row[key];
            tr.appendChild(td);
          });
          frag.appendChild(tr);
        }
      });
      tbody.appendChild(frag);
    }

    Plotly.newPlot("wind-scatter", __TRACES_JSON__, __LAYOUT_JSON__).then(plot => {
      function applyFilters() {
        const month = monthSelect.value;
        const statuses = getSelectedStatuses();
        filterTraces(plot, month, statuses);
        updateVisibility(plot, statuses);
        renderTable(month, statuses);
      }
      document.querySelectorAll('input[data-trace]').forEach(cb => cb.addEventListener('change', applyFilters));
      monthSelect.addEventListener('change', applyFilters);
      applyFilters();
    });
  </script>
</body>
</html>
"##;

fn bucket_for<'a>(buckets: &'a VectorBuckets, status: Status) -> &'a StatusBucket {
    match status {
        Status::Operational => &buckets.operational,
        Status::Canceled => &buckets.canceled,
        Status::Unknown => &buckets.unknown,
    }
}

fn traces_json(buckets: &VectorBuckets) -> Value {
    let traces: Vec<Value> = STATUS_STYLE
        .iter()
        .map(|&(status, symbol, color)| {
            let bucket = bucket_for(buckets, status);
            json!({
                "x": bucket.x,
                "y": bucket.y,
                "mode": "markers",
                "name": status.as_str(),
                "marker": {
                    "symbol": symbol,
                    "color": color,
                    "size": 8,
                    "line": {"width": 1, "color": "#000"},
                },
                "showlegend": true,
            })
        })
        .collect();
    Value::Array(traces)
}

fn layout_json() -> Value {
    json!({
        "title": {"text": "最大風速ベクトルの散布図（運航ステータス別）"},
        "xaxis": {
            "title": {"text": "東西成分 (m/s, +が東)"},
            "zeroline": true, "zerolinewidth": 1, "zerolinecolor": "#000",
            "showgrid": true, "gridcolor": "rgba(0,0,0,0.1)",
        },
        "yaxis": {
            "title": {"text": "南北成分 (m/s, +が北)"},
            "zeroline": true, "zerolinewidth": 1, "zerolinecolor": "#000",
            "showgrid": true, "gridcolor": "rgba(0,0,0,0.1)",
            "scaleanchor": "x", "scaleratio": 1,
        },
        "legend": {"orientation": "h", "yanchor": "bottom", "y": 1.02, "xanchor": "right", "x": 1},
        "width": 800,
        "height": 800,
    })
}

fn data_store_json(buckets: &VectorBuckets) -> Value {
    let mut store = serde_json::Map::new();
    for &(status, _, _) in &STATUS_STYLE {
        let bucket = bucket_for(buckets, status);
        store.insert(
            status.as_str().to_string(),
            json!({"x": bucket.x, "y": bucket.y, "month": bucket.month}),
        );
    }
    Value::Object(store)
}

fn table_rows_json(rows: &[&CleanRecord]) -> Value {
    let rows: Vec<Value> = rows
        .iter()
        .map(|record| {
            json!({
                "date": record.date.format("%Y-%m-%d").to_string(),
                "weekday": record.weekday,
                "to_status": record.to_status.as_str(),
                "from_status": record.from_status.as_str(),
                "max_wind_direction": record.wind_direction,
                "max_wind_speed_mps": record.wind_speed,
                "month": record.month_label(),
            })
        })
        .collect();
    Value::Array(rows)
}

fn month_options(months: &[String]) -> String {
    months
        .iter()
        .map(|m| format!("<option value=\"{m}\">{m}月</option>"))
        .collect()
}

/// Render the scatter page. Rows without a usable wind vector are excluded
/// from both the chart and the side table.
pub fn render_scatter_page(records: &[CleanRecord]) -> String {
    let mut vectors = Vec::new();
    let mut plotted_rows = Vec::new();
    for record in records {
        if let Some(v) = WindVector::from_record(record) {
            vectors.push(v);
            plotted_rows.push(record);
        }
    }
    let buckets = VectorBuckets::from_vectors(&vectors);

    TEMPLATE
        .replace("__PLOTLY_CDN__", PLOTLY_CDN)
        .replace("__MONTH_OPTIONS__", &month_options(&buckets.months()))
        .replace("__DATA_JSON__", &data_store_json(&buckets).to_string())
        .replace("__TABLE_JSON__", &table_rows_json(&plotted_rows).to_string())
        .replace("__TRACES_JSON__", &traces_json(&buckets).to_string())
        .replace("__LAYOUT_JSON__", &layout_json().to_string())
}

pub fn write_scatter_page(path: &Path, records: &[CleanRecord]) -> Result<()> {
    write_html(path, &render_scatter_page(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(month: u32, status: Status, direction: &str, speed: &str) -> CleanRecord {
        CleanRecord {
            date: NaiveDate::from_ymd_opt(2022, month, 10).unwrap(),
            weekday: "木".to_string(),
            to_status: status,
            from_status: status,
            wind_direction: direction.to_string(),
            wind_speed: speed.to_string(),
        }
    }

    #[test]
    fn page_embeds_all_placeholders() {
        let records = [
            record(3, Status::Operational, "東", "10.0"),
            record(7, Status::Canceled, "北", "15.0"),
        ];
        let page = render_scatter_page(&records);

        assert!(!page.contains("__"), "unreplaced placeholder left in page");
        assert!(page.contains("wind-scatter"));
        assert!(page.contains(PLOTLY_CDN));
        assert!(page.contains("<option value=\"3\">3月</option>"));
        assert!(page.contains("<option value=\"7\">7月</option>"));
        assert!(page.contains("2022-03-10"));
    }

    #[test]
    fn vectorless_rows_stay_out_of_the_table() {
        let records = [
            record(3, Status::Operational, "東", "10.0"),
            record(3, Status::Operational, "", ""),
        ];
        let page = render_scatter_page(&records);
        // One plotted row, so exactly one table entry for that date.
        assert_eq!(page.matches("2022-03-10").count(), 1);
    }
}
